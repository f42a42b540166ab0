// LogTally - platform/fs.rs
//
// Thin filesystem helpers so the app layer never builds readers/writers
// by hand. Handles are owned by the returned buffer and closed on drop.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Open `path` for buffered, line-oriented reading.
///
/// A directory opens fine on Unix and only fails on first read, so the
/// check is made here to report it up front on every platform.
pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::other("path is a directory, not a file"));
    }
    Ok(BufReader::new(file))
}

/// Create (or truncate) `path` for buffered writing.
pub fn create_buffered(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}

/// Shorten `line` to at most `max_chars` characters for log previews.
pub fn preview(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;

    #[test]
    fn test_open_buffered_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");
        std::fs::write(&path, "one\ntwo\n").unwrap();
        let lines: Vec<_> = open_buffered(&path)
            .unwrap()
            .lines()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_open_buffered_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_buffered(dir.path()).unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_open_buffered_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_buffered(&dir.path().join("nope.log")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_preview_is_char_safe() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("short", 200), "short");
    }
}
