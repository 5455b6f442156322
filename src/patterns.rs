//! Address patterns and venue keywords.
//!
//! Both tables are static. Matching is case-insensitive throughout.

use regex::Regex;
use std::sync::LazyLock;

/// Street suffixes recognised at the end of an address, long form first.
pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "St", "Avenue", "Ave", "Road", "Rd", "Drive", "Dr", "Boulevard", "Blvd", "Lane",
    "Ln", "Way", "Place", "Pl", "Court", "Ct", "Circle", "Cir", "Parkway", "Pkwy",
];

/// Words that mark a line as naming a venue.
pub const VENUE_KEYWORDS: &[&str] = &[
    "Park",
    "Center",
    "School",
    "Stadium",
    "Field",
    "Complex",
    "Facility",
    "Sports",
    "Recreation",
    "Community",
];

/// Venue candidates must be longer than this many characters.
pub const MIN_VENUE_LEN: usize = 5;

/// Which shape of address a pattern recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// `123 Main Street`
    NumberedStreet,
    /// `123 Main, KS 66061`
    CityStateZip,
    /// `Main Street`
    BareStreet,
}

/// A compiled address regex together with the shape it recognises.
pub struct AddressPattern {
    pub kind: AddressKind,
    pub regex: Regex,
}

impl AddressPattern {
    pub fn new(kind: AddressKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            regex: Regex::new(pattern)?,
        })
    }
}

/// Address patterns in the order their matches are reported.
pub static ADDRESS_PATTERNS: LazyLock<Vec<AddressPattern>> = LazyLock::new(|| {
    let suffix = STREET_SUFFIXES.join("|");
    let defs = [
        (
            AddressKind::NumberedStreet,
            format!(r"(?i)\d+\s+[a-z][a-z\s]+(?:{suffix})\b"),
        ),
        (
            AddressKind::CityStateZip,
            r"(?i)\d+\s+[a-z\s]+,\s*[a-z]{2}\s+\d{5}".to_string(),
        ),
        (
            AddressKind::BareStreet,
            format!(r"(?i)[a-z][a-z\s]+(?:{suffix})\b"),
        ),
    ];

    defs.iter()
        .filter_map(|(kind, pattern)| AddressPattern::new(*kind, pattern).ok())
        .collect()
});

/// How [`find_venues`] splits text into candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueMode {
    /// Each trimmed line is a candidate.
    #[default]
    Lines,
    /// Each whitespace-delimited word is a candidate.
    Words,
}

/// Every address match, pattern by pattern, duplicates preserved.
pub fn find_addresses(text: &str) -> Vec<String> {
    find_tagged_addresses(text)
        .into_iter()
        .map(|(_, address)| address)
        .collect()
}

/// Like [`find_addresses`], with the shape of each match attached.
pub fn find_tagged_addresses(text: &str) -> Vec<(AddressKind, String)> {
    ADDRESS_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .regex
                .find_iter(text)
                .map(|m| (pattern.kind, m.as_str().to_string()))
        })
        .collect()
}

/// Candidates that mention a venue keyword, in order of appearance.
pub fn find_venues(text: &str, mode: VenueMode) -> Vec<String> {
    let candidates: Box<dyn Iterator<Item = &str>> = match mode {
        VenueMode::Lines => Box::new(text.lines().map(str::trim)),
        VenueMode::Words => Box::new(text.split_whitespace()),
    };

    candidates
        .filter(|candidate| is_venue(candidate))
        .map(str::to_string)
        .collect()
}

fn is_venue(candidate: &str) -> bool {
    if candidate.chars().count() <= MIN_VENUE_LEN {
        return false;
    }
    let lower = candidate.to_lowercase();
    VENUE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}
