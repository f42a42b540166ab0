// LogTally - bin/sum_profit.rs
//
// Sums the real numbers found in a piece of text.

use clap::Parser;
use logtally::core::numbers::{generator_numbers, sum_profit};
use logtally::util::{self, constants};
use std::io::Read;

/// Add up every space-delimited number in the given text.
///
/// Reads the text from the arguments, or from stdin when none are given.
#[derive(Parser, Debug)]
#[command(name = "sum-profit", version, about)]
struct Cli {
    /// Text to scan; joined with single spaces.
    text: Vec<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    util::logging::init(cli.debug, None);

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: failed to read stdin: {e}");
            std::process::exit(constants::EXIT_FAILURE);
        }
        buf
    } else {
        cli.text.join(" ")
    };

    let total = sum_profit(&text, generator_numbers);
    tracing::debug!(chars = text.len(), total, "Text scanned");
    println!("Total income: {total}");
}
