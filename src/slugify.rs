// src/slugify.rs

/// Normalizes arbitrary text into a URL-safe slug.
///
/// Implementations must be pure and deterministic, and idempotent: feeding a
/// slug back through `slugify` returns it unchanged.
pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Default slugifier backed by the `slug` crate.
///
/// Transliterates to ASCII where possible, lowercases, replaces runs of
/// non-alphanumeric characters with a single `-`, and trims leading and
/// trailing separators. Empty input yields an empty string.
#[derive(Debug, Default, Clone)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
