// tests/support/mod.rs
// Shared in-memory record and slug store used by multiple integration test
// binaries. Some symbols are purposely unused in individual test crates.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use slugcraft::{DefaultSlugifier, RecordId, SlugGenerator, SlugScope, SluggableRecord};

/// In-memory record with plain and per-locale field values, built in a
/// consuming-builder style.
#[derive(Default)]
pub struct TestRecord {
    id: Option<RecordId>,
    plain: HashMap<String, String>,
    translations: HashMap<(String, String), String>,
    default_locale: Option<String>,
    dirty_slots: HashSet<Option<String>>,
}

impl TestRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(RecordId::new(id));
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.plain.insert(field.into(), value.into());
        self
    }

    pub fn with_translation(
        mut self,
        field: impl Into<String>,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.translations
            .insert((field.into(), locale.into()), value.into());
        self
    }

    /// Locale whose translations back plain reads of locale-aware fields.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Flags the slug slot for `locale` (or the plain slot) as explicitly
    /// set by the caller.
    pub fn with_dirty_slug(mut self, locale: Option<&str>) -> Self {
        self.dirty_slots.insert(locale.map(str::to_owned));
        self
    }
}

impl SluggableRecord for TestRecord {
    fn read(&self, field: &str, locale: Option<&str>) -> Option<String> {
        match locale {
            Some(l) => self
                .translations
                .get(&(field.to_owned(), l.to_owned()))
                .cloned(),
            None => self.plain.get(field).cloned().or_else(|| {
                let default = self.default_locale.as_deref()?;
                self.translations
                    .get(&(field.to_owned(), default.to_owned()))
                    .cloned()
            }),
        }
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn slug_is_dirty(&self, locale: Option<&str>) -> bool {
        self.dirty_slots.contains(&locale.map(str::to_owned))
    }
}

/// In-memory slug store keyed by `(locale, slug)`, tracking which record
/// owns each claimed value.
#[derive(Default)]
pub struct InMemorySlugs {
    taken: Mutex<HashMap<(Option<String>, String), RecordId>>,
}

impl InMemorySlugs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn claim(&self, slug: impl Into<String>, locale: Option<&str>, owner: impl Into<String>) {
        self.taken
            .lock()
            .unwrap()
            .insert((locale.map(str::to_owned), slug.into()), RecordId::new(owner));
    }
}

impl SlugScope for InMemorySlugs {
    fn exists(&self, candidate: &str, locale: Option<&str>, exclude: Option<&RecordId>) -> bool {
        let taken = self.taken.lock().unwrap();
        match taken.get(&(locale.map(str::to_owned), candidate.to_owned())) {
            Some(owner) => exclude != Some(owner),
            None => false,
        }
    }
}

pub fn generator(scope: Arc<InMemorySlugs>) -> SlugGenerator {
    init_tracing();
    SlugGenerator::new(Arc::new(DefaultSlugifier), scope)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}
