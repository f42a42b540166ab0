// LogTally - core/export.rs
//
// CSV and JSON export of records.
// Core layer: writes to any Write trait object; the path is for error context.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Export format, chosen from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// JSON document shape: the full tally plus the exported records.
#[derive(Serialize)]
struct JsonExport<'a> {
    counts: &'a LevelCounts,
    records: &'a [LogRecord],
}

/// Export records to CSV with header `date,time,level,message`.
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut count = 0;
    for record in records {
        csv_writer.serialize(record).map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;
        count += 1;
    }

    // serialize() only emits the header alongside the first row.
    if count == 0 {
        csv_writer
            .write_record(["date", "time", "level", "message"])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export counts and records as a pretty-printed JSON object.
pub fn export_json<W: Write>(
    counts: &LevelCounts,
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let doc = JsonExport { counts, records };
    serde_json::to_writer_pretty(writer, &doc).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}
