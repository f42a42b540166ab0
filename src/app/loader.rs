// LogTally - app/loader.rs
//
// Streams a log file line by line through the line parser.
// Malformed lines are skipped; only file access failures are errors.

use crate::core::model::LogRecord;
use crate::core::parser::parse_line;
use crate::platform::fs;
use crate::util::constants::DEBUG_MAX_LINE_PREVIEW;
use crate::util::error::LoadError;
use std::io::{self, BufRead};
use std::path::Path;

/// Load every well-formed record from the file at `path`, in file order.
///
/// Fails with [`LoadError::NotFound`] when the path does not exist and with
/// [`LoadError::Io`] for anything else that stops the read. The file handle
/// is released on every return path.
pub fn load(path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let reader = fs::open_buffered(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    read_records(reader, path)
}

/// Parse records from an already-open reader.
///
/// `path` is only used for error context and logging.
pub fn read_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let mut records = Vec::new();
    let mut skipped: u64 = 0;
    let mut lines_read: u64 = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        lines_read += 1;

        match parse_line(&line) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                if !line.trim().is_empty() {
                    tracing::debug!(
                        file = %path.display(),
                        line_number = lines_read,
                        preview = fs::preview(&line, DEBUG_MAX_LINE_PREVIEW),
                        "Skipping malformed line"
                    );
                }
            }
        }
    }

    tracing::info!(
        file = %path.display(),
        records = records.len(),
        skipped,
        lines = lines_read,
        "Log loaded"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_records_skips_malformed_and_blank() {
        let input = "2024-01-01 10:00:00 INFO started\nbad line\n\n2024-01-01 10:01:00 error boom\n";
        let records = read_records(Cursor::new(input), Path::new("mem.log")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "started");
        assert_eq!(records[1].level, "ERROR");
    }

    #[test]
    fn test_read_records_handles_crlf() {
        let input = "D T INFO one\r\nD T DEBUG two\r\n";
        let records = read_records(Cursor::new(input), Path::new("mem.log")).unwrap();
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_read_records_invalid_utf8_is_io_failure() {
        let input: &[u8] = b"D T INFO ok\n\xff\xfe broken\n";
        let result = read_records(Cursor::new(input), Path::new("bin.log"));
        assert!(
            matches!(result, Err(LoadError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.log");
        let result = load(&path);
        assert!(
            matches!(result, Err(LoadError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_load_directory_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path());
        assert!(
            matches!(result, Err(LoadError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }
}
