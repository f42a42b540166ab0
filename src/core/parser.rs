// LogTally - core/parser.rs
//
// Single-line parsing of `DATE TIME LEVEL MESSAGE...` records.
// Core layer: works on string slices, never touches the filesystem.

use crate::core::model::LogRecord;

/// Parse one raw line into a [`LogRecord`].
///
/// Returns `None` for blank lines and for lines with fewer than four
/// whitespace-separated tokens. Only the first three tokens are split off;
/// the message keeps its inner spacing exactly as written.
///
/// `splitn(4, ' ')` would yield empty fields for runs of spaces between the
/// leading tokens, so the tokens are peeled off one at a time instead.
pub fn parse_line(raw: &str) -> Option<LogRecord> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let (date, rest) = next_token(line)?;
    let (time, rest) = next_token(rest)?;
    let (level, rest) = next_token(rest)?;
    let message = rest.trim_start();
    if message.is_empty() {
        return None;
    }

    Some(LogRecord {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_uppercase(),
        message: message.to_string(),
    })
}

/// Split the leading whitespace-delimited token off `s`.
///
/// The remainder starts at the separator, so a caller that stops splitting
/// sees the tail untouched.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}
