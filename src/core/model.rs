// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// Log Record (output of line parsing)
// =============================================================================

/// One accepted log line: `DATE TIME LEVEL MESSAGE...`.
///
/// Date and time are opaque tokens. The level is upper-cased but otherwise
/// unrestricted, so `TRACE` or `FATAL` are as valid as the known levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Calendar-date token, e.g. `2024-01-01`.
    pub date: String,

    /// Time-of-day token, e.g. `10:00:00`.
    pub time: String,

    /// Severity label, upper-cased.
    pub level: String,

    /// Everything after the level token, embedded spaces intact.
    pub message: String,
}

// =============================================================================
// Known levels
// =============================================================================

/// The severities that always get a row in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownLevel {
    Info,
    Debug,
    Error,
    Warning,
}

impl KnownLevel {
    /// Returns all variants in display order.
    pub fn all() -> &'static [KnownLevel] {
        &[
            KnownLevel::Info,
            KnownLevel::Debug,
            KnownLevel::Error,
            KnownLevel::Warning,
        ]
    }

    /// Upper-case label as it appears in log files and reports.
    pub fn label(&self) -> &'static str {
        match self {
            KnownLevel::Info => "INFO",
            KnownLevel::Debug => "DEBUG",
            KnownLevel::Error => "ERROR",
            KnownLevel::Warning => "WARNING",
        }
    }

    /// Looks up a known level by its normalised label.
    pub fn from_label(label: &str) -> Option<KnownLevel> {
        Self::all().iter().copied().find(|l| l.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for KnownLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Level counts
// =============================================================================

/// Per-level record counts.
///
/// The four known levels are always present (zero by default). Any other
/// level seen in the input lands in an overflow map so it still contributes
/// to `total()`, even though the summary table only shows known levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    known: [usize; 4],
    other: BTreeMap<String, usize>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the counter for `level` (expected upper-case).
    pub fn increment(&mut self, level: &str) {
        match KnownLevel::from_label(level) {
            Some(known) => self.known[known.index()] += 1,
            None => *self.other.entry(level.to_string()).or_insert(0) += 1,
        }
    }

    /// Count for a known level.
    pub fn known(&self, level: KnownLevel) -> usize {
        self.known[level.index()]
    }

    /// Count for any level label; case-insensitive, zero when never seen.
    pub fn get(&self, level: &str) -> usize {
        let level = level.to_uppercase();
        match KnownLevel::from_label(&level) {
            Some(known) => self.known(known),
            None => self.other.get(&level).copied().unwrap_or(0),
        }
    }

    /// Known levels with their counts, in display order.
    pub fn iter_known(&self) -> impl Iterator<Item = (KnownLevel, usize)> + '_ {
        KnownLevel::all().iter().map(|&l| (l, self.known(l)))
    }

    /// Levels outside the known set, sorted by label.
    pub fn unknown(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.other.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum over known and unknown levels.
    pub fn total(&self) -> usize {
        self.known.iter().sum::<usize>() + self.other.values().sum::<usize>()
    }
}

impl Serialize for LevelCounts {
    /// Serialises as a flat map: known levels in display order, then the rest.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(4 + self.other.len()))?;
        for (level, count) in self.iter_known() {
            map.serialize_entry(level.label(), &count)?;
        }
        for (level, count) in self.unknown() {
            map.serialize_entry(level, &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_display_order() {
        let labels: Vec<_> = KnownLevel::all().iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["INFO", "DEBUG", "ERROR", "WARNING"]);
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(KnownLevel::from_label("ERROR"), Some(KnownLevel::Error));
        assert_eq!(KnownLevel::from_label("error"), None);
        assert_eq!(KnownLevel::from_label("WARN"), None);
    }

    #[test]
    fn test_new_counts_are_zero() {
        let counts = LevelCounts::new();
        for (_, count) in counts.iter_known() {
            assert_eq!(count, 0);
        }
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.unknown().count(), 0);
    }

    #[test]
    fn test_increment_unknown_level_goes_to_overflow() {
        let mut counts = LevelCounts::new();
        counts.increment("TRACE");
        counts.increment("TRACE");
        counts.increment("INFO");
        assert_eq!(counts.get("trace"), 2);
        assert_eq!(counts.known(KnownLevel::Info), 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.unknown().collect::<Vec<_>>(), vec![("TRACE", 2)]);
    }

    #[test]
    fn test_counts_serialise_known_first() {
        let mut counts = LevelCounts::new();
        counts.increment("FATAL");
        counts.increment("ERROR");
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"INFO":0,"DEBUG":0,"ERROR":1,"WARNING":0,"FATAL":1}"#
        );
    }
}
