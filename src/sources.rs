//! Text sources, tried in order until one produces text.

use crate::tokenizer::{decode_latin1, tokenize, TokenMode};
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// Which source produced the text a record was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    StringsCommand,
    ByteScan,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::StringsCommand => "strings",
            SourceKind::ByteScan => "byte scan",
        }
    }
}

/// One way of turning a file into text.
///
/// Returning `None` (or whitespace only) hands over to the next source.
pub trait TextSource {
    fn kind(&self) -> SourceKind;

    fn extract(&self, path: Option<&Path>, bytes: &[u8]) -> Option<String>;
}

/// Run each source in turn and return the first non-blank text.
pub fn first_text(
    sources: &[Box<dyn TextSource>],
    path: Option<&Path>,
    bytes: &[u8],
) -> Option<(SourceKind, String)> {
    for source in sources {
        match source.extract(path, bytes) {
            Some(text) if !text.trim().is_empty() => {
                tracing::debug!(
                    source = source.kind().label(),
                    chars = text.chars().count(),
                    "text source succeeded"
                );
                return Some((source.kind(), text));
            }
            _ => tracing::debug!(source = source.kind().label(), "text source produced nothing"),
        }
    }
    None
}

// ── strings(1) ────────────────────────────────────────────────────────────────

/// Lists printable strings by running an external program over the file.
///
/// Spawn failures and non-zero exits count as "no text". The call blocks
/// until the child exits.
pub struct StringsCommand {
    program: String,
}

impl StringsCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TextSource for StringsCommand {
    fn kind(&self) -> SourceKind {
        SourceKind::StringsCommand
    }

    fn extract(&self, path: Option<&Path>, _bytes: &[u8]) -> Option<String> {
        let path = path?;
        let output = match Command::new(&self.program).arg(path).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "could not run string lister");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(program = %self.program, status = %output.status, "string lister failed");
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ── In-process byte scan ──────────────────────────────────────────────────────

static PAREN_TEXT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").ok());
static TEXT_OBJECT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)BT\s*(.*?)\s*ET").ok());

/// Splits the raw bytes into printable runs, one per line.
pub struct ByteScan {
    mode: TokenMode,
    content_markers: bool,
}

impl ByteScan {
    pub fn new(mode: TokenMode) -> Self {
        Self {
            mode,
            content_markers: false,
        }
    }

    /// Also collect `( … )` string literals and `BT … ET` text objects,
    /// ahead of the printable runs.
    pub fn with_content_markers(mut self, enabled: bool) -> Self {
        self.content_markers = enabled;
        self
    }
}

impl TextSource for ByteScan {
    fn kind(&self) -> SourceKind {
        SourceKind::ByteScan
    }

    fn extract(&self, _path: Option<&Path>, bytes: &[u8]) -> Option<String> {
        let mut pieces = if self.content_markers {
            content_markers(&decode_latin1(bytes))
        } else {
            Vec::new()
        };
        pieces.extend(tokenize(bytes, self.mode));

        if pieces.is_empty() {
            None
        } else {
            Some(pieces.join("\n"))
        }
    }
}

/// Text inside parentheses, then the bodies of `BT … ET` blocks.
pub fn content_markers(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    if let Some(re) = PAREN_TEXT.as_ref() {
        found.extend(re.captures_iter(text).map(|c| c[1].to_string()));
    }
    if let Some(re) = TEXT_OBJECT.as_ref() {
        found.extend(re.captures_iter(text).map(|c| c[1].trim().to_string()));
    }
    found
}
