// src/generator/mod.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::errors::SlugResult;
use crate::options::SlugOptions;
use crate::record::{SlugScope, SluggableRecord};
use crate::slugify::Slugifier;

mod locales;
mod single;

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GeneratedSlug {
    /// Single-locale mode produced this value.
    Single(String),
    /// Locale mode: one independently resolved slug per locale that produced
    /// a value. Locales whose source resolved empty are absent from the map.
    PerLocale(BTreeMap<String, String>),
    /// No slug was produced; the target field should be left untouched.
    Skipped,
}

impl GeneratedSlug {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(slug) => Some(slug),
            _ => None,
        }
    }

    pub fn for_locale(&self, locale: &str) -> Option<&str> {
        match self {
            Self::PerLocale(slugs) => slugs.get(locale).map(String::as_str),
            _ => None,
        }
    }
}

/// Produces final slug values for records, combining source resolution,
/// normalization, and collision probing into one decision.
///
/// Persisting the result is the caller's responsibility; the generator is
/// synchronous and issues the scope's existence query sequentially, once per
/// probe.
pub struct SlugGenerator {
    slugifier: Arc<dyn Slugifier>,
    scope: Arc<dyn SlugScope>,
}

impl SlugGenerator {
    pub fn new(slugifier: Arc<dyn Slugifier>, scope: Arc<dyn SlugScope>) -> Self {
        Self { slugifier, scope }
    }

    /// Computes the slug value(s) for `record` under `options`.
    ///
    /// Fails fast with [`crate::SlugError::Configuration`] when the options
    /// are malformed; all data irregularities (missing fields, empty source
    /// text) degrade to [`GeneratedSlug::Skipped`] or an absent locale entry
    /// instead of failing the wider save operation.
    pub fn generate(
        &self,
        record: &dyn SluggableRecord,
        options: &SlugOptions,
    ) -> SlugResult<GeneratedSlug> {
        options.validate()?;
        match options.locales() {
            Some(locales) => self.generate_per_locale(record, options, locales),
            None => Ok(match self.slug_for_slot(record, options, None)? {
                Some(slug) => GeneratedSlug::Single(slug),
                None => GeneratedSlug::Skipped,
            }),
        }
    }
}
