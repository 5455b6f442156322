//! Course id and course name, derived from certification filenames.
//!
//! Filenames follow the convention `<course id> - <course name>.pdf`, e.g.
//! `KS23012TJD - Patriots Run 5k.pdf`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Reported when a filename does not start with a course id.
pub const UNKNOWN_COURSE_ID: &str = "Unknown";

const NAME_SEPARATOR: &str = " - ";
const PDF_SUFFIX: &str = ".pdf";

static COURSE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^KS\d+\w+").ok());

/// The final path component, or the input itself when it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// `KS` + digits + word characters at the very start of `filename`.
pub fn course_id(filename: &str) -> String {
    COURSE_ID
        .as_ref()
        .and_then(|re| re.find(filename))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_COURSE_ID.to_string())
}

/// Everything after the first `" - "`, without the `.pdf` suffix.
pub fn course_name(filename: &str) -> String {
    let name = filename
        .split_once(NAME_SEPARATOR)
        .map_or(filename, |(_, rest)| rest);
    name.replace(PDF_SUFFIX, "")
}
