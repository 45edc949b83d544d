// src/uniqueness.rs
use tracing::{debug, warn};

use crate::errors::{SlugError, SlugResult};
use crate::record::{RecordId, SlugScope};

/// Truncates `text` to at most `max_chars` characters, on a character
/// boundary. A hard cut: no word-boundary awareness.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Resolves `base` into a slug that is unique within the caller's scope.
///
/// The base is first truncated to `max_length`. If the scope reports no
/// collision it is returned as-is; otherwise numeric suffixes are probed in
/// strictly ascending order (`base-1`, `base-2`, ...), re-truncating the base
/// so each candidate including its full suffix stays within `max_length`. A
/// freed lower suffix is never reused, so output is stable for a fixed scope
/// state. Probes are issued one at a time; the scope is the only external
/// call.
///
/// `exclude` is the identity of the record being updated: its own current
/// slug does not count as a collision. An empty base is returned unchanged,
/// since uniqueness is meaningless for it.
///
/// Without a `probe_limit` the search is unbounded; callers are expected to
/// bound the scope size. With a limit, exceeding it yields
/// [`SlugError::SuffixesExhausted`].
pub fn resolve_unique(
    base: &str,
    max_length: usize,
    locale: Option<&str>,
    exclude: Option<&RecordId>,
    probe_limit: Option<u64>,
    scope: &dyn SlugScope,
) -> SlugResult<String> {
    let base = truncate_chars(base, max_length);
    if base.is_empty() {
        return Ok(String::new());
    }
    if !scope.exists(base, locale, exclude) {
        return Ok(base.to_owned());
    }

    debug!(slug = base, "slug taken, probing suffixes");
    let mut counter: u64 = 1;
    loop {
        if let Some(limit) = probe_limit {
            if counter > limit {
                warn!(slug = base, limit, "suffix probe limit exhausted");
                return Err(SlugError::SuffixesExhausted {
                    base: base.to_owned(),
                    limit,
                });
            }
        }
        let suffix = format!("-{counter}");
        let room = max_length.saturating_sub(suffix.len());
        let candidate = format!("{}{suffix}", truncate_chars(base, room));
        if !scope.exists(&candidate, locale, exclude) {
            return Ok(candidate);
        }
        counter += 1;
    }
}
