// src/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a persisted record.
///
/// Used only to exempt a record's own slug from collision checks while it is
/// being updated; the crate never interprets the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// Read capability over the entity being slugged.
///
/// The generator never owns or mutates the record; adapters implement this
/// trait over whatever storage model holds the actual data.
pub trait SluggableRecord {
    /// Read a field value.
    ///
    /// A `locale` of `None` reads the plain value of the field; for
    /// locale-aware fields this is the record's default-locale value. A
    /// `locale` of `Some(..)` is an exact read: it returns `None` when the
    /// field holds no value for that locale (the source resolver applies
    /// default-locale fallback itself), and fields that are not locale-aware
    /// also return `None` so the resolver falls through to the plain value.
    fn read(&self, field: &str, locale: Option<&str>) -> Option<String>;

    /// Identity of the record, or `None` for a record that has never been
    /// persisted.
    fn id(&self) -> Option<&RecordId>;

    /// Whether the slug target field (for `locale`, in locale mode) was
    /// explicitly set by the caller since the last persisted value.
    ///
    /// This is the manual-override signal: a dirty, non-empty slug value is
    /// normalized and de-duplicated but never regenerated from the source
    /// fields. The flag cannot be recovered from field data alone, so
    /// adapters must supply it from their own change tracking. The default
    /// treats every slot as auto-generated.
    fn slug_is_dirty(&self, _locale: Option<&str>) -> bool {
        false
    }
}

/// Existence query answering whether a slug value is already taken within
/// the caller-defined uniqueness scope.
///
/// `exclude` carries the identity of the record being updated, whose own
/// current slug must not count as a collision against itself. In locale mode
/// the query is issued with the locale being generated; implementations
/// decide whether their scope distinguishes locales.
pub trait SlugScope: Send + Sync {
    fn exists(&self, candidate: &str, locale: Option<&str>, exclude: Option<&RecordId>) -> bool;
}

impl<F> SlugScope for F
where
    F: Fn(&str, Option<&str>, Option<&RecordId>) -> bool + Send + Sync,
{
    fn exists(&self, candidate: &str, locale: Option<&str>, exclude: Option<&RecordId>) -> bool {
        self(candidate, locale, exclude)
    }
}
