// LogTally - bin/contact_bot.rs
//
// Interactive contact book over stdin/stdout.

use clap::Parser;
use logtally::app::contacts;
use logtally::util::{self, constants};

/// Assistant bot that keeps name -> phone contacts in memory.
///
/// Commands: hello, add <name> <phone>, change <name> <phone>,
/// phone <name>, all, close | exit.
#[derive(Parser, Debug)]
#[command(name = "contact-bot", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    util::logging::init(cli.debug, None);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = contacts::run(stdin.lock(), &mut stdout.lock()) {
        tracing::error!(error = %e, "Terminal I/O failed");
        eprintln!("Error: {e}");
        std::process::exit(constants::EXIT_FAILURE);
    }
}
