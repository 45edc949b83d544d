//! Scoped, locale-aware slug generation.
//!
//! Derives URL-safe slugs from one or more source fields of a record and
//! resolves collisions by probing numeric suffixes (`base`, `base-1`,
//! `base-2`, ...) against a caller-supplied existence query. When a record
//! holds per-locale field values, one slug is generated independently per
//! configured locale.
//!
//! The crate never touches storage: it consumes read capabilities
//! ([`record::SluggableRecord`], [`record::SlugScope`]) and returns the final
//! slug value(s) for the caller to persist.

pub mod errors;
pub mod generator;
pub mod options;
pub mod record;
pub mod slugify;
pub mod source;
pub mod uniqueness;

pub use errors::{SlugError, SlugResult};
pub use generator::{GeneratedSlug, SlugGenerator};
pub use options::{SlugOptions, SlugOptionsBuilder, SlugSource};
pub use record::{RecordId, SlugScope, SluggableRecord};
pub use slugify::{DefaultSlugifier, Slugifier};
