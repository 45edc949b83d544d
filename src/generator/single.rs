// src/generator/single.rs
use super::SlugGenerator;
use crate::errors::SlugResult;
use crate::options::SlugOptions;
use crate::record::SluggableRecord;
use crate::source::resolve_text;
use crate::uniqueness::{resolve_unique, truncate_chars};

impl SlugGenerator {
    /// Decision sequence for one slug slot: the plain target field, or one
    /// locale's entry in locale mode.
    pub(super) fn slug_for_slot(
        &self,
        record: &dyn SluggableRecord,
        options: &SlugOptions,
        locale: Option<&str>,
    ) -> SlugResult<Option<String>> {
        if let Some(current) = manual_override(record, options, locale) {
            let base = self.slugifier.slugify(&current);
            // An override that normalizes to nothing degrades to regeneration.
            if !base.is_empty() {
                return self.finalize(&base, options, locale, record).map(Some);
            }
        }

        let text = resolve_text(record, options, locale);
        let base = self.slugifier.slugify(&text);
        if base.is_empty() {
            return Ok(None);
        }
        self.finalize(&base, options, locale, record).map(Some)
    }

    fn finalize(
        &self,
        base: &str,
        options: &SlugOptions,
        locale: Option<&str>,
        record: &dyn SluggableRecord,
    ) -> SlugResult<String> {
        if !options.enforce_uniqueness() {
            return Ok(truncate_chars(base, options.max_length()).to_owned());
        }
        resolve_unique(
            base,
            options.max_length(),
            locale,
            record.id(),
            options.probe_limit(),
            self.scope.as_ref(),
        )
    }
}

/// A non-empty current value the caller flagged as explicitly set keeps its
/// base: it is normalized and de-duplicated, never re-derived from the source
/// fields. The check inspects only the requested locale's slot; it never
/// falls back to another locale's slug.
fn manual_override(
    record: &dyn SluggableRecord,
    options: &SlugOptions,
    locale: Option<&str>,
) -> Option<String> {
    if !record.slug_is_dirty(locale) {
        return None;
    }
    record
        .read(options.target_field(), locale)
        .filter(|value| !value.trim().is_empty())
}
