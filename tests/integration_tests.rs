// Integration tests for coursepdf.
//
// Library behaviour is exercised through the public API; the binary is driven
// through `CARGO_BIN_EXE_coursepdf`. Every test passes `--no-strings` (or
// disables the string lister in config) so results do not depend on the
// host having strings(1) installed.

use coursepdf::course::{course_id, course_name};
use coursepdf::patterns::{find_addresses, find_venues};
use coursepdf::tokenizer::tokenize;
use coursepdf::{
    run_batch, BatchConfig, CourseExtractor, ExtractError, ExtractorConfig, SourceKind, TokenMode,
    VenueMode,
};
use std::process::Command;

fn offline() -> CourseExtractor {
    CourseExtractor::new(ExtractorConfig {
        strings_command: None,
        ..Default::default()
    })
}

// ── Extractor ─────────────────────────────────────────────────────────────────

#[test]
fn default_config_uses_strings_first() {
    let cfg = ExtractorConfig::default();
    assert_eq!(cfg.strings_command.as_deref(), Some("strings"));
    assert_eq!(cfg.token_mode, TokenMode::Words);
    assert_eq!(cfg.venue_mode, VenueMode::Lines);
    assert!(!cfg.content_markers);
}

#[test]
fn tokenize_survives_every_byte_value() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let words = tokenize(&bytes, TokenMode::Words);
    assert!(!words.is_empty());
    assert!(words.iter().all(|t| t.chars().count() > 3));

    let fragments = tokenize(&bytes, TokenMode::Fragments);
    assert!(fragments.iter().all(|t| !t.is_empty()));
}

#[test]
fn embedded_token_is_recovered() {
    let tokens = tokenize(b"\x01HelloWorld\x02", TokenMode::Words);
    assert!(tokens.contains(&"HelloWorld".to_string()));
}

#[test]
fn address_and_venue_examples() {
    let addresses = find_addresses("123 Main Street, Anytown");
    assert_eq!(addresses[0], "123 Main Street");

    let venues = find_venues("Go to Central Park today", VenueMode::Lines);
    assert!(venues.iter().any(|v| v.contains("Park")));
}

#[test]
fn filename_derivation() {
    assert_eq!(course_id("KS23012TJD - Patriots Run 5k.pdf"), "KS23012TJD");
    assert_eq!(course_name("KS23012TJD - Patriots Run 5k.pdf"), "Patriots Run 5k");
    assert_eq!(course_id("report.pdf"), "Unknown");
    assert_eq!(course_name("report.pdf"), "report");
}

#[test]
fn pdf_like_bytes_produce_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("KS22022TJD - Jared Coones Memorial Pumpkin Run.pdf");
    let mut bytes = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n".to_vec();
    bytes.extend_from_slice(b"stream\x00\x9c\x8b\x01");
    bytes.extend_from_slice(b"Start line: Lakeview Community Center\x00");
    bytes.extend_from_slice(b"\x02\x031501 Shady Oak Drive\x00endstream");
    std::fs::write(&path, &bytes).unwrap();

    let extraction = offline().extract_path(&path).unwrap();
    assert_eq!(extraction.source, Some(SourceKind::ByteScan));

    let r = extraction.record;
    assert_eq!(r.course_id, "KS22022TJD");
    assert_eq!(r.course_name, "Jared Coones Memorial Pumpkin Run");
    assert_eq!(r.best_address(), Some("1501 Shady Oak Drive"));
    assert_eq!(r.best_venue(), Some("Start line: Lakeview Community Center"));
}

#[test]
fn missing_file_is_an_error() {
    let err = offline().extract_path("no/such/file.pdf").unwrap_err();
    assert!(matches!(err, ExtractError::FileNotFound(_)));
    assert!(err.to_string().starts_with("File not found"));
}

#[test]
fn error_display_is_non_empty() {
    let errors: &[ExtractError] = &[
        ExtractError::FileNotFound("x.pdf".into()),
        ExtractError::InvalidArgument("test".into()),
        ExtractError::Config("bad".into()),
    ];
    for e in errors {
        assert!(!e.to_string().is_empty(), "empty display for {e:?}");
    }
}

// ── Batch driver ──────────────────────────────────────────────────────────────

#[test]
fn batch_over_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = BatchConfig {
        assets_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run_batch(&cfg, &offline(), &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(summary.results.is_empty());
    assert_eq!(
        report.matches("File not found: ").count(),
        cfg.files.len()
    );
}

// ── Binary ────────────────────────────────────────────────────────────────────

fn coursepdf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_coursepdf"))
}

#[test]
fn cli_reports_missing_file_as_json() {
    let output = coursepdf()
        .args(["--no-strings", "/no/such/KS1X - Gone.pdf"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["error"].as_str().unwrap().contains("File not found"));
}

#[test]
fn cli_rejects_unknown_flags_as_json() {
    let output = coursepdf().arg("--bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("error").is_some());
}

#[test]
fn cli_prints_single_line_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("KS20015TJD - Gobbler Grind 5K 2020.pdf");
    std::fs::write(&path, b"\x00Meet at Olathe Sports Complex\x00\x0118 Elm St\x00").unwrap();

    let output = coursepdf().arg("--no-strings").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["course_id"], "KS20015TJD");
    assert_eq!(json["course_name"], "Gobbler Grind 5K 2020");
    assert_eq!(json["addresses"][0], "18 Elm St");
    assert_eq!(json["venues"][0], "Meet at Olathe Sports Complex");
    assert_eq!(json["filename"], "KS20015TJD - Gobbler Grind 5K 2020.pdf");
}

#[test]
fn cli_batch_mode_skips_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = coursepdf()
        .arg("--no-strings")
        .arg("--assets-dir")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("File not found: ").count(), 10);
    assert!(stdout.contains("SUMMARY OF EXTRACTED INFORMATION"));
}
