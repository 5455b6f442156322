use crate::SourceKind;
use serde::Serialize;

// ── ExtractionResult ──────────────────────────────────────────────────────────

/// What was learned about one certification document.
///
/// Serialises to `{course_id, course_name, addresses, venues, filename}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// `KS…` identifier from the filename, or `"Unknown"`.
    pub course_id: String,

    /// Course name from the filename.
    pub course_name: String,

    /// Every address match, in pattern order. Duplicates are kept.
    pub addresses: Vec<String>,

    /// Every venue candidate, in order of appearance.
    pub venues: Vec<String>,

    /// The file name the record was built from.
    pub filename: String,
}

impl ExtractionResult {
    /// The first address found; callers treat it as the best guess.
    pub fn best_address(&self) -> Option<&str> {
        self.addresses.first().map(String::as_str)
    }

    /// The first venue candidate found.
    pub fn best_venue(&self) -> Option<&str> {
        self.venues.first().map(String::as_str)
    }

    /// Single-line JSON form of the record.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// An [`ExtractionResult`] together with the text it was scanned from.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: ExtractionResult,

    /// Source that produced `text`; `None` when every source came up empty.
    pub source: Option<SourceKind>,

    /// The scanned text (empty when `source` is `None`).
    pub text: String,
}

impl Extraction {
    /// Up to `limit` trimmed lines longer than 5 characters, for review.
    pub fn sample_lines(&self, limit: usize) -> Vec<&str> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 5)
            .take(limit)
            .collect()
    }

    /// Number of characters in the scanned text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
