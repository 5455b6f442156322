//! # coursepdf
//!
//! Heuristic extraction of course information from race-course certification
//! PDFs.
//!
//! ## What this crate does
//!
//! 1. **Derive the course** — the course id (`KS23012TJD`) and course name
//!    (`Patriots Run 5k`) come from the filename.
//! 2. **Recover text** — the raw bytes are handed to the `strings` utility;
//!    when that yields nothing, the bytes are decoded as Latin-1 and split
//!    into runs of printable characters.
//! 3. **Scan** — the recovered text is matched against street-address
//!    patterns and venue keywords.
//!
//! No PDF structure is honoured: compressed content streams stay opaque, so
//! results are a best-effort approximation.
//!
//! ## Quick example
//!
//! ```no_run
//! use coursepdf::{CourseExtractor, ExtractorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = CourseExtractor::new(ExtractorConfig::default());
//! let extraction = extractor.extract_path("KS23012TJD - Patriots Run 5k.pdf")?;
//!
//! println!("Course  : {}", extraction.record.course_id);
//! if let Some(address) = extraction.record.best_address() {
//!     println!("Address : {address}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod batch;
pub mod course;
mod extractor;
pub mod logging;
pub mod patterns;
mod record;
pub mod sources;
pub mod tokenizer;

pub use batch::{run_batch, BatchConfig, BatchSummary};
pub use extractor::CourseExtractor;
pub use patterns::{AddressKind, VenueMode};
pub use record::{Extraction, ExtractionResult};
pub use sources::{SourceKind, TextSource};
pub use tokenizer::TokenMode;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`CourseExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Program used to list printable strings of a file. `None` skips the
    /// subprocess and goes straight to the in-process byte scan.
    pub strings_command: Option<String>,

    /// Token length threshold used by the byte scan.
    pub token_mode: TokenMode,

    /// How venue candidates are split out of the recovered text.
    pub venue_mode: VenueMode,

    /// When `true`, the byte scan also collects text found inside
    /// `( … )` string literals and `BT … ET` text objects.
    pub content_markers: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strings_command: Some("strings".into()),
            token_mode: TokenMode::default(),
            venue_mode: VenueMode::default(),
            content_markers: false,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A filesystem I/O error occurred while reading an input file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The command line could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A batch configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
