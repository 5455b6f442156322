//! Run the byte-level scan over any file and show what it recovers.
//!
//! Usage:
//!   cargo run --example scan_bytes -- "KS23012TJD - Patriots Run 5k.pdf"

use coursepdf::patterns::find_tagged_addresses;
use coursepdf::{CourseExtractor, ExtractorConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file>", args[0]);
        process::exit(1);
    }

    let config = ExtractorConfig {
        strings_command: None,
        content_markers: true,
        ..Default::default()
    };
    let extractor = CourseExtractor::new(config);

    let extraction = extractor.extract_path(&args[1]).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    println!("Course : {} ({})", extraction.record.course_name, extraction.record.course_id);
    println!("Text   : {} characters", extraction.char_count());

    for (kind, address) in find_tagged_addresses(&extraction.text).iter().take(10) {
        println!("  {kind:?}: {address}");
    }
    for venue in extraction.record.venues.iter().take(10) {
        println!("  Venue: {venue}");
    }
}
