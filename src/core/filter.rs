// LogTally - core/filter.rs
//
// Level filter over loaded records.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;

/// Records whose level equals `level` (case-insensitive), in input order.
///
/// No match is an empty result, not an error.
pub fn filter_by_level(records: &[LogRecord], level: &str) -> Vec<LogRecord> {
    let wanted = level.to_uppercase();
    records
        .iter()
        .filter(|record| record.level == wanted)
        .cloned()
        .collect()
}
