// src/source.rs
use crate::options::{SlugOptions, SlugSource};
use crate::record::SluggableRecord;

/// Resolves the raw text a slug is derived from.
///
/// Field sources are read in order and joined with single spaces; fields
/// resolving to empty or absent are skipped rather than inserting blank
/// segments. In locale mode a field with no value for the requested locale
/// falls back to the record's plain (default-locale) value, never to another
/// locale's explicit override. An all-empty resolution returns an empty
/// string; deciding whether that is acceptable is the caller's policy.
pub fn resolve_text(
    record: &dyn SluggableRecord,
    options: &SlugOptions,
    locale: Option<&str>,
) -> String {
    match options.source() {
        SlugSource::Callback(callback) => callback(record, locale),
        SlugSource::Fields(names) => names
            .iter()
            .filter_map(|field| read_with_fallback(record, field, locale))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn read_with_fallback(
    record: &dyn SluggableRecord,
    field: &str,
    locale: Option<&str>,
) -> Option<String> {
    let localized = locale
        .and_then(|l| record.read(field, Some(l)))
        .filter(|value| !value.trim().is_empty());
    localized
        .or_else(|| record.read(field, None))
        .filter(|value| !value.trim().is_empty())
}
