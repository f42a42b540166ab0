// LogTally - core/aggregate.rs
//
// Per-level tallies over an already-loaded record set.
// Core layer: pure logic, no I/O.

use crate::core::model::{LevelCounts, LogRecord};

/// Count records by level.
///
/// All known levels start at zero. Levels outside the known set get their
/// own counter instead of being dropped.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    records.iter().fold(LevelCounts::new(), |mut counts, record| {
        counts.increment(&record.level);
        counts
    })
}
