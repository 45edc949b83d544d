// src/generator/locales.rs
use std::collections::BTreeMap;

use super::{GeneratedSlug, SlugGenerator};
use crate::errors::SlugResult;
use crate::options::SlugOptions;
use crate::record::SluggableRecord;

impl SlugGenerator {
    /// Runs the single-slot decision sequence once per configured locale.
    ///
    /// Locales are fully independent: each gets its own source reads (with
    /// default-locale fallback), its own override inspection, and its own
    /// existence scope, so a collision in one locale never influences
    /// another's candidate pool. No state is shared between iterations and
    /// ordering between locales is irrelevant.
    pub(super) fn generate_per_locale(
        &self,
        record: &dyn SluggableRecord,
        options: &SlugOptions,
        locales: &[String],
    ) -> SlugResult<GeneratedSlug> {
        let mut slugs = BTreeMap::new();
        for locale in locales {
            if let Some(slug) = self.slug_for_slot(record, options, Some(locale))? {
                slugs.insert(locale.clone(), slug);
            }
        }
        Ok(GeneratedSlug::PerLocale(slugs))
    }
}
