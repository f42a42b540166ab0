// LogTally - main.rs
//
// Report entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. The load -> count -> report run and its exit code

use clap::Parser;
use logtally::app::pipeline::{self, ReportOptions};
use logtally::platform::config::{self, PlatformPaths};
use logtally::util::{self, constants};
use std::path::PathBuf;

/// LogTally - count log records by level.
///
/// Reads a log file of `DATE TIME LEVEL MESSAGE...` lines, prints how many
/// records each level has, and optionally lists the records of one level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse.
    log_file: PathBuf,

    /// Level whose records are listed after the summary (case-insensitive).
    level: Option<String>,

    /// Also write the records (the filtered set if a level is given) to this
    /// file; `.json` selects JSON, anything else CSV.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Exit code for a failed `Cli::try_parse`.
///
/// Help and version go to stdout with success; usage errors exit 1.
fn exit_code_for(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        constants::EXIT_FAILURE
    } else {
        0
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code_for(&e));
        }
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = constants::APP_VERSION,
        file = %cli.log_file.display(),
        filter_level = cli.level.as_deref().unwrap_or("-"),
        "LogTally starting"
    );

    let options = ReportOptions {
        log_path: cli.log_file,
        level: cli.level,
        export_path: cli.export,
        level_column_width: app_config.level_column_width,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match pipeline::run(&options, &mut out) {
        Ok(outcome) => {
            tracing::info!(
                records = outcome.records,
                matched = ?outcome.matched,
                exported = ?outcome.exported,
                "Report complete"
            );
        }
        Err(e) => {
            // The user-facing line below is the one stderr report.
            tracing::debug!(error = ?e, "Report failed");
            eprintln!("Error: {e}");
            std::process::exit(constants::EXIT_FAILURE);
        }
    }
}
