// src/options.rs
use std::fmt;
use std::sync::Arc;

use crate::errors::{SlugError, SlugResult};
use crate::record::SluggableRecord;

/// Callback form of a slug source: receives the record and the locale being
/// generated (`None` in single-locale mode) and returns the raw text to
/// slugify, bypassing field concatenation entirely.
pub type SourceCallback = dyn Fn(&dyn SluggableRecord, Option<&str>) -> String + Send + Sync;

/// Where the text that feeds the slugifier comes from.
#[derive(Clone)]
pub enum SlugSource {
    /// Ordered field names, resolved per locale and concatenated with single
    /// spaces. Fields that resolve to empty or absent are skipped.
    Fields(Vec<String>),
    /// Caller-supplied derivation for fully custom logic.
    Callback(Arc<SourceCallback>),
}

impl SlugSource {
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(names) => f.debug_tuple("Fields").field(names).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Immutable configuration for one slug generation request.
///
/// Built via [`SlugOptions::builder`]; validation happens at generation time
/// so a malformed value fails fast with [`SlugError::Configuration`] instead
/// of producing a broken slug.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    source: SlugSource,
    target_field: String,
    enforce_uniqueness: bool,
    max_length: usize,
    locales: Option<Vec<String>>,
    probe_limit: Option<u64>,
}

impl SlugOptions {
    pub fn builder() -> SlugOptionsBuilder {
        SlugOptionsBuilder::default()
    }

    pub fn source(&self) -> &SlugSource {
        &self.source
    }

    /// Name of the field the final slug is written to.
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    pub fn enforce_uniqueness(&self) -> bool {
        self.enforce_uniqueness
    }

    /// Maximum slug length in characters, suffix included.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Configured locales, or `None` in single-locale mode.
    pub fn locales(&self) -> Option<&[String]> {
        self.locales.as_deref()
    }

    pub fn probe_limit(&self) -> Option<u64> {
        self.probe_limit
    }

    pub(crate) fn validate(&self) -> SlugResult<()> {
        if self.max_length == 0 {
            return Err(SlugError::configuration("max_length must be positive"));
        }
        if let SlugSource::Fields(names) = &self.source {
            if names.is_empty() {
                return Err(SlugError::configuration(
                    "at least one source field is required",
                ));
            }
        }
        if let Some(locales) = &self.locales {
            if locales.is_empty() {
                return Err(SlugError::configuration(
                    "locale mode requires at least one locale",
                ));
            }
        }
        Ok(())
    }
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            source: SlugSource::fields(["name"]),
            target_field: "url".to_owned(),
            enforce_uniqueness: true,
            max_length: 250,
            locales: None,
            probe_limit: None,
        }
    }
}

#[derive(Default)]
pub struct SlugOptionsBuilder {
    source: Option<SlugSource>,
    target_field: Option<String>,
    allow_duplicates: bool,
    max_length: Option<usize>,
    locales: Option<Vec<String>>,
    probe_limit: Option<u64>,
}

impl SlugOptionsBuilder {
    /// Derive the slug from these fields, in order.
    pub fn from_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(SlugSource::fields(names));
        self
    }

    /// Derive the slug from a callback instead of field concatenation.
    pub fn from_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&dyn SluggableRecord, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.source = Some(SlugSource::Callback(Arc::new(callback)));
        self
    }

    /// Write the slug to this field instead of the default `url`.
    pub fn save_to(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    /// Skip collision probing; the slug is still truncated to the maximum
    /// length.
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    pub fn maximum_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Generate one independent slug per listed locale.
    pub fn for_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    /// Cap the number of suffix probes; exceeding it yields
    /// [`SlugError::SuffixesExhausted`]. Unbounded when unset.
    pub fn probe_limit(mut self, limit: u64) -> Self {
        self.probe_limit = Some(limit);
        self
    }

    pub fn build(self) -> SlugOptions {
        let defaults = SlugOptions::default();
        SlugOptions {
            source: self.source.unwrap_or(defaults.source),
            target_field: self.target_field.unwrap_or(defaults.target_field),
            enforce_uniqueness: !self.allow_duplicates,
            max_length: self.max_length.unwrap_or(defaults.max_length),
            locales: self.locales,
            probe_limit: self.probe_limit,
        }
    }
}
