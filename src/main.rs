//! CLI for extracting course information from certification PDFs.
//!
//! With a path argument, prints one JSON record (or `{"error": …}` and exit
//! status 1). Without one, runs the batch report over the configured files.

use clap::{error::ErrorKind, Parser, ValueEnum};
use coursepdf::{
    logging, run_batch, BatchConfig, CourseExtractor, ExtractError, ExtractorConfig, Result,
    TokenMode, VenueMode,
};
use std::{
    io,
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, Parser)]
#[command(version, about = "Extract course ids, addresses and venues from certification PDFs")]
struct Cli {
    /// PDF to analyse; omit to run the batch report
    path: Option<PathBuf>,

    /// TOML file with `assets_dir` and `files` for the batch report
    #[arg(long, conflicts_with = "path")]
    config: Option<PathBuf>,

    /// Override the batch assets directory
    #[arg(long, conflicts_with = "path")]
    assets_dir: Option<PathBuf>,

    /// Skip the external string lister and scan bytes directly
    #[arg(long)]
    no_strings: bool,

    /// Program used to list printable strings
    #[arg(long, default_value = "strings")]
    strings_command: String,

    /// Also collect `( … )` literals and `BT … ET` blocks in the byte scan
    #[arg(long)]
    content_markers: bool,

    /// How venue candidates are split out of the text
    #[arg(long, value_enum, default_value_t = VenueModeArg::Lines)]
    venue_mode: VenueModeArg,

    /// Token length threshold for the byte scan
    #[arg(long, value_enum, default_value_t = TokenModeArg::Words)]
    token_mode: TokenModeArg,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VenueModeArg {
    Lines,
    Words,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenModeArg {
    Words,
    Fragments,
}

impl Cli {
    fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            strings_command: (!self.no_strings).then(|| self.strings_command.clone()),
            token_mode: match self.token_mode {
                TokenModeArg::Words => TokenMode::Words,
                TokenModeArg::Fragments => TokenMode::Fragments,
            },
            venue_mode: match self.venue_mode {
                VenueModeArg::Lines => VenueMode::Lines,
                VenueModeArg::Words => VenueMode::Words,
            },
            content_markers: self.content_markers,
        }
    }

    fn batch_config(&self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)?,
            None => BatchConfig::default(),
        };
        if let Some(dir) = &self.assets_dir {
            config.assets_dir = dir.clone();
        }
        Ok(config)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or_default();
            fail(&ExtractError::InvalidArgument(
                first_line.trim_start_matches("error: ").to_string(),
            ));
        }
    };

    logging::init_cli_logger(cli.verbose);
    let extractor = CourseExtractor::new(cli.extractor_config());

    match &cli.path {
        Some(path) => match run_single(&extractor, path) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e),
        },
        None => {
            if let Err(e) = cli
                .batch_config()
                .and_then(|config| run_batch(&config, &extractor, &mut io::stdout().lock()))
            {
                tracing::error!(error = %e, "batch run aborted");
                eprintln!("Error: {e}");
                process::exit(1);
            }
            println!("\nExtraction complete. Note: this is a heuristic text extraction method.");
        }
    }
}

fn run_single(extractor: &CourseExtractor, path: &Path) -> Result<String> {
    extractor.extract_path(path)?.record.to_json()
}

fn fail(error: &ExtractError) -> ! {
    println!("{}", serde_json::json!({ "error": error.to_string() }));
    process::exit(1);
}
