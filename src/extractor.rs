use crate::course::{course_id, course_name, file_name};
use crate::patterns::{find_addresses, find_venues};
use crate::sources::{first_text, ByteScan, StringsCommand, TextSource};
use crate::{ExtractError, Extraction, ExtractionResult, ExtractorConfig, Result};
use std::io;
use std::path::Path;

// ── CourseExtractor ───────────────────────────────────────────────────────────

/// Entry point for turning certification PDFs into [`ExtractionResult`]s.
///
/// # Creating an extractor
///
/// ```
/// use coursepdf::{CourseExtractor, ExtractorConfig, VenueMode};
///
/// // strings(1) first, byte scan as fallback
/// let default = CourseExtractor::new(ExtractorConfig::default());
///
/// // byte scan only, one venue candidate per word
/// let cfg = ExtractorConfig {
///     strings_command: None,
///     venue_mode: VenueMode::Words,
///     ..Default::default()
/// };
/// let offline = CourseExtractor::new(cfg);
/// ```
pub struct CourseExtractor {
    config: ExtractorConfig,
    sources: Vec<Box<dyn TextSource>>,
}

impl CourseExtractor {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Build the source chain described by `config`.
    pub fn new(config: ExtractorConfig) -> Self {
        let mut sources: Vec<Box<dyn TextSource>> = Vec::new();
        if let Some(program) = &config.strings_command {
            sources.push(Box::new(StringsCommand::new(program.clone())));
        }
        sources.push(Box::new(
            ByteScan::new(config.token_mode).with_content_markers(config.content_markers),
        ));

        Self { config, sources }
    }

    /// Use a caller-supplied source chain instead of the configured one.
    pub fn with_sources(config: ExtractorConfig, sources: Vec<Box<dyn TextSource>>) -> Self {
        Self { config, sources }
    }

    // ── Extraction ────────────────────────────────────────────────────────────

    /// Read the file at `path` and extract from it.
    ///
    /// Only reading the file can fail; once the bytes are in memory the
    /// result is always a well-formed record, possibly with empty lists.
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::FileNotFound(path.to_path_buf()),
            _ => ExtractError::IoError(e),
        })?;
        Ok(self.extract(Some(path), &file_name(path), &bytes))
    }

    /// Extract from bytes already in memory. Sources that need a path on
    /// disk (the `strings` subprocess) are skipped.
    pub fn extract_bytes(&self, filename: &str, bytes: &[u8]) -> Extraction {
        self.extract(None, filename, bytes)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the active [`ExtractorConfig`].
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn extract(&self, path: Option<&Path>, filename: &str, bytes: &[u8]) -> Extraction {
        let (source, text) = match first_text(&self.sources, path, bytes) {
            Some((kind, text)) => (Some(kind), text),
            None => {
                tracing::debug!(filename, "no text recovered");
                (None, String::new())
            }
        };

        let record = ExtractionResult {
            course_id: course_id(filename),
            course_name: course_name(filename),
            addresses: find_addresses(&text),
            venues: find_venues(&text, self.config.venue_mode),
            filename: filename.to_string(),
        };

        tracing::debug!(
            filename,
            addresses = record.addresses.len(),
            venues = record.venues.len(),
            "extracted"
        );

        Extraction {
            record,
            source,
            text,
        }
    }
}
