//! Command-line interface for fencecat.
//!
//! This binary provides access to the fencecat library functionality,
//! concatenating the text files under a directory into a single document of
//! labeled code fences.

use clap::Parser;
use fencecat::{BinaryDetection, FencecatBuilder, FencecatOptions, default_separator, fencecat};
use std::path::PathBuf;
use std::process::exit;

/// fencecat — concatenate text files with syntax fences
#[derive(Parser)]
#[command(name = "fencecat", version, about, long_about = None)]
struct Cli {
    /// Input directory to process
    input_dir: PathBuf,

    /// Output file path
    output_file: PathBuf,

    /// Honor .gitignore patterns found directly under the input directory
    #[arg(long)]
    gitignore: bool,

    /// Exclude glob patterns (can be repeated)
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Custom separator prefixed to each file header (default: 30 underscores)
    #[arg(long, default_value_t = default_separator())]
    separator: String,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> FencecatOptions {
        FencecatBuilder::new(self.input_dir, self.output_file)
            .use_gitignore(self.gitignore)
            .exclude_patterns(self.exclude)
            .separator(self.separator)
            .binary_detection(self.binary_detection)
            .build()
    }
}

fn main() {
    let cli = Cli::parse();
    match fencecat(cli.into_options()) {
        Ok(summary) => {
            println!(
                "Processed {} files, skipped {}",
                summary.processed, summary.skipped
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
