//! Shared primitive types used across the rotation.
//!
//! RULE: every case-insensitive comparison in the crate goes through
//! `fold()`. History matching, exclusion matching, and task-repeat
//! matching must all agree on one normalization.

use std::hash::{Hash, Hasher};

/// Canonical normalization: trimmed, lowercased.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A team member. Identity is the name, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as configured, for display and logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized key used for matching against history and exclusions.
    pub fn key(&self) -> String {
        fold(&self.name)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// An operations task. The raw form may carry chat hyperlink markup
/// (`<url|Label>`); repeat tracking uses the folded display label.
#[derive(Debug, Clone)]
pub struct Task {
    raw: String,
}

impl Task {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw form, exactly as configured. This is what goes into the
    /// outbound message so chat clients render the hyperlink.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Display label: the text after the last `|` of a `<url|Label>`
    /// hyperlink, or the raw text itself.
    pub fn label(&self) -> String {
        if self.raw.starts_with('<') {
            if let Some((_, label)) = self.raw.rsplit_once('|') {
                return label.trim_end_matches('>').trim().to_string();
            }
        }
        self.raw.trim().to_string()
    }

    /// Normalized key used for repeat tracking across runs.
    pub fn key(&self) -> String {
        fold(&self.label())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Task {}
