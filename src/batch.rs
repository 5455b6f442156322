//! Batch driver: run the extractor over a list of files and print a report.

use crate::{CourseExtractor, Extraction, ExtractError, ExtractionResult, Result};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 60;
const SHOWN_MATCHES: usize = 3;
const SHOWN_SAMPLE_LINES: usize = 5;

/// Which files a batch run processes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory the filenames are resolved against.
    pub assets_dir: PathBuf,

    /// Filenames, processed in order.
    pub files: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("/mnt/c/Github/raceMap/public/assets"),
            files: [
                "KS23012TJD - Patriots Run 5k.pdf",
                "KS23020TJD - Gobbler Grind '23 Alternate 5K.pdf",
                "KS25001DT - Kansas City Mother's Day 5 km.pdf",
                "KS22022TJD - Jared Coones Memorial Pumpkin Run.pdf",
                "KS18019TJD - Heartland Soccer 5k.pdf",
                "KS15045KH - Bug Run  5k.pdf",
                "KS22033TJD - Gobbler Grind 2022 5k.pdf",
                "KS20015TJD - Gobbler Grind 5K 2020.pdf",
                "KS19007TJD - BVRC Special Olympics 5K.pdf",
                "KS17013TJD - Komen KC 5K.pdf",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl BatchConfig {
    /// Parse a TOML document of the form
    ///
    /// ```toml
    /// assets_dir = "/data/certs"
    /// files = ["KS23012TJD - Patriots Run 5k.pdf"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ExtractError::Config(e.to_string()))
    }

    /// Load a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Full path of `filename` inside the assets directory.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.assets_dir.join(filename)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// One record per file that was found, in input order.
    pub results: Vec<ExtractionResult>,

    /// Filenames that did not exist.
    pub missing: Vec<String>,
}

/// Process every file in `config`, writing the report to `out`.
///
/// Missing files are reported and skipped. A file that exists but cannot be
/// read aborts the run with the I/O error.
pub fn run_batch<W: Write>(
    config: &BatchConfig,
    extractor: &CourseExtractor,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    writeln!(out, "Advanced PDF Analysis - Race Course Certification Documents")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for filename in &config.files {
        let path = config.resolve(filename);
        match extractor.extract_path(&path) {
            Ok(extraction) => {
                write_analysis(out, &extraction)?;
                summary.results.push(extraction.record);
            }
            Err(ExtractError::FileNotFound(_)) => {
                tracing::warn!(path = %path.display(), "file not found");
                writeln!(out, "\nFile not found: {filename}")?;
                summary.missing.push(filename.clone());
            }
            Err(e) => return Err(e),
        }
    }

    write_summary(out, &summary.results)?;
    Ok(summary)
}

fn write_analysis<W: Write>(out: &mut W, extraction: &Extraction) -> Result<()> {
    let record = &extraction.record;

    writeln!(out, "\n{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(out, "ANALYZING: {}", record.filename)?;
    writeln!(out, "{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(out, "Course ID: {}", record.course_id)?;
    writeln!(out, "Course Name: {}", record.course_name)?;

    match extraction.source {
        Some(kind) => writeln!(
            out,
            "\nText recovered via {} ({} characters)",
            kind.label(),
            extraction.char_count()
        )?,
        None => {
            writeln!(out, "\nNo text could be recovered")?;
            return Ok(());
        }
    }

    write_matches(out, "Addresses found", "No clear addresses found", &record.addresses)?;
    write_matches(out, "Venues found", "No clear venues found", &record.venues)?;

    let sample = extraction.sample_lines(SHOWN_SAMPLE_LINES);
    if !sample.is_empty() {
        writeln!(out, "\nSample extracted text:")?;
        for (i, line) in sample.iter().enumerate() {
            writeln!(out, "  {}. {line}", i + 1)?;
        }
    }

    Ok(())
}

fn write_matches<W: Write>(out: &mut W, label: &str, empty: &str, found: &[String]) -> Result<()> {
    if found.is_empty() {
        writeln!(out, "{empty}")?;
    } else {
        let shown: Vec<&str> = found.iter().take(SHOWN_MATCHES).map(String::as_str).collect();
        writeln!(out, "{label}: {shown:?}")?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, results: &[ExtractionResult]) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "SUMMARY OF EXTRACTED INFORMATION")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for result in results {
        writeln!(out, "\nCourse ID: {}", result.course_id)?;
        writeln!(out, "Course Name: {}", result.course_name)?;
        writeln!(
            out,
            "Address: {}",
            result.best_address().unwrap_or("Not clearly identified")
        )?;
        writeln!(
            out,
            "Venue: {}",
            result.best_venue().unwrap_or("Not clearly identified")
        )?;
        writeln!(out, "{}", "-".repeat(40))?;
    }

    Ok(())
}
