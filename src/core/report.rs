// LogTally - core/report.rs
//
// Plain-text rendering of level counts and filtered record details.
// Core layer: writes to any Write trait object, makes no decisions.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants::{
    COUNT_COLUMN_RULE_WIDTH, COUNT_HEADER, LEVEL_HEADER, NO_RECORDS_NOTICE,
};
use std::io::{self, Write};

/// Write the two-column summary table.
///
/// Rows follow the known-level display order, whatever order the counts
/// were accumulated in. Unknown levels are not shown.
pub fn write_counts<W: Write>(
    out: &mut W,
    counts: &LevelCounts,
    level_width: usize,
) -> io::Result<()> {
    writeln!(out, "{:<level_width$} | {}", LEVEL_HEADER, COUNT_HEADER)?;
    writeln!(
        out,
        "{}-|-{}",
        "-".repeat(level_width),
        "-".repeat(COUNT_COLUMN_RULE_WIDTH)
    )?;
    for (level, count) in counts.iter_known() {
        writeln!(out, "{:<level_width$} | {count}", level.label())?;
    }
    Ok(())
}

/// Write the details section for a level filter.
///
/// Each record is shown as `DATE TIME - MESSAGE`; the level is implied by
/// the section title.
pub fn write_details<W: Write>(
    out: &mut W,
    records: &[LogRecord],
    level: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Log details for level '{}':", level.to_uppercase())?;

    if records.is_empty() {
        writeln!(out, "{}", NO_RECORDS_NOTICE)?;
        return Ok(());
    }

    for record in records {
        writeln!(out, "{} {} - {}", record.date, record.time, record.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_counts(counts: &LevelCounts, width: usize) -> String {
        let mut buf = Vec::new();
        write_counts(&mut buf, counts, width).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counts_table_layout() {
        let mut counts = LevelCounts::new();
        counts.increment("ERROR");
        counts.increment("INFO");
        counts.increment("INFO");

        let output = render_counts(&counts, 17);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Level             | Count");
        assert_eq!(lines[1], "------------------|---------");
        assert_eq!(lines[2], "INFO              | 2");
        assert_eq!(lines[3], "DEBUG             | 0");
        assert_eq!(lines[4], "ERROR             | 1");
        assert_eq!(lines[5], "WARNING           | 0");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_counts_table_hides_unknown_levels() {
        let mut counts = LevelCounts::new();
        counts.increment("TRACE");
        let output = render_counts(&counts, 10);
        assert!(!output.contains("TRACE"));
        assert!(output.starts_with("Level      | Count\n"));
    }

    #[test]
    fn test_details_lists_records() {
        let records = vec![LogRecord {
            date: "2024-01-01".to_string(),
            time: "10:01:00".to_string(),
            level: "ERROR".to_string(),
            message: "failed to connect".to_string(),
        }];
        let mut buf = Vec::new();
        write_details(&mut buf, &records, "error").unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "\nLog details for level 'ERROR':\n2024-01-01 10:01:00 - failed to connect\n"
        );
    }

    #[test]
    fn test_details_empty_shows_notice() {
        let mut buf = Vec::new();
        write_details(&mut buf, &[], "debug").unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Log details for level 'DEBUG':"));
        assert!(output.ends_with("No records for this level.\n"));
    }
}
