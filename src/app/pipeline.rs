// LogTally - app/pipeline.rs
//
// One-shot report run: load -> count -> summary table -> optional level
// details -> optional export. Output goes to any Write so the binary and the
// end-to-end tests drive the same path.

use crate::app::loader;
use crate::core::aggregate::count_by_level;
use crate::core::export::{self, ExportFormat};
use crate::core::filter::filter_by_level;
use crate::core::report;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{ExportError, LogTallyError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Inputs for a single report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Log file to read.
    pub log_path: PathBuf,
    /// Optional level whose records are listed after the summary.
    pub level: Option<String>,
    /// Optional CSV/JSON export target.
    pub export_path: Option<PathBuf>,
    /// Width of the level column in the summary table.
    pub level_column_width: usize,
}

impl ReportOptions {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            level: None,
            export_path: None,
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
        }
    }
}

/// What a run produced, for logging by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Records accepted from the log file.
    pub records: usize,
    /// Records matching the level filter, when one was given.
    pub matched: Option<usize>,
    /// Records written to the export file, when one was given.
    pub exported: Option<usize>,
}

/// Run the report pipeline, writing the text report to `out`.
pub fn run<W: Write>(options: &ReportOptions, out: &mut W) -> Result<RunOutcome> {
    let records = loader::load(&options.log_path)?;
    let counts = count_by_level(&records);

    report::write_counts(out, &counts, options.level_column_width).map_err(report_io)?;

    // An empty level argument means no filter.
    let filtered = match options.level.as_deref().filter(|l| !l.is_empty()) {
        Some(level) => {
            let matching = filter_by_level(&records, level);
            report::write_details(out, &matching, level).map_err(report_io)?;
            Some(matching)
        }
        None => None,
    };

    out.flush().map_err(report_io)?;

    let exported = match options.export_path {
        Some(ref export_path) => {
            let selection = filtered.as_deref().unwrap_or(records.as_slice());
            let export_io = |e| ExportError::Io {
                path: export_path.clone(),
                source: e,
            };
            let mut writer = fs::create_buffered(export_path).map_err(export_io)?;
            let written = match ExportFormat::from_path(export_path) {
                ExportFormat::Csv => export::export_csv(selection, &mut writer, export_path)?,
                ExportFormat::Json => {
                    export::export_json(&counts, selection, &mut writer, export_path)?
                }
            };
            writer.flush().map_err(export_io)?;
            tracing::info!(path = %export_path.display(), entries = written, "Export written");
            Some(written)
        }
        None => None,
    };

    Ok(RunOutcome {
        records: records.len(),
        matched: filtered.map(|f| f.len()),
        exported,
    })
}

fn report_io(source: std::io::Error) -> LogTallyError {
    LogTallyError::Io {
        operation: "report output",
        source,
    }
}
