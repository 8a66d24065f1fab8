//! Event-type filter normalization and the retention test.
//!
//! Users type shorthands like `push` or `pullrequest`; GitHub tags records
//! `PushEvent`, `PullRequestEvent`. [`canonicalize`] maps one to the other,
//! and [`EventFilter`] keeps both spellings so a record is retained when
//! either matches its type tag.

/// Canonical `…Event` form of a user-supplied filter string.
///
/// Lower-cases the input, removes every occurrence of the literal `event`,
/// capitalizes the first remaining character, and appends `Event`:
/// `"push"` → `"PushEvent"`, `"PushEvent"` → `"PushEvent"`, `"Watch"` →
/// `"WatchEvent"`.
///
/// An input that is empty after stripping (`"event"`, `""`) canonicalizes to
/// the degenerate tag `"Event"`, which matches nothing GitHub emits.
pub fn canonicalize(input: &str) -> String {
    let stripped = input.to_lowercase().replace("event", "");

    let mut chars = stripped.chars();
    let mut canonical = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    canonical.push_str("Event");
    canonical
}

/// A user-supplied event-type filter, kept in both its raw and canonical
/// spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    raw: String,
    canonical: String,
}

impl EventFilter {
    pub fn new(input: impl Into<String>) -> Self {
        let raw = input.into();
        let canonical = canonicalize(&raw);
        Self { raw, canonical }
    }

    /// The canonical `…Event` form of the filter input.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whether a record with the given type tag is retained.
    ///
    /// True when the raw input or its canonical form equals the tag,
    /// case-insensitively. A record with no type tag never matches an
    /// active filter.
    pub fn matches(&self, tag: Option<&str>) -> bool {
        let Some(tag) = tag else {
            return false;
        };
        self.raw.eq_ignore_ascii_case(tag) || self.canonical.eq_ignore_ascii_case(tag)
    }
}
