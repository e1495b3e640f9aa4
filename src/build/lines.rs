//! Line-by-line file source.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{error::SequenceError, Restart, Sequence};

/// Yields the lines of a file, one per pull.
///
/// A single `String` buffer is reused for every line. Trailing `\n` or
/// `\r\n` is stripped, and bytes that are not valid UTF-8 are replaced with
/// `U+FFFD`. The sequence ends when the file is exhausted, when a
/// read fails, or immediately if the file could not be opened.
pub struct Lines {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    bytes: Vec<u8>,
    line: String,
    has_line: bool,
}

/// Create a sequence over the lines of the file at `path`.
///
/// Opening happens here, but a failure is not an error: it is logged and
/// the sequence is simply empty. Use [`try_lines`] to handle it instead.
pub fn lines(path: impl AsRef<Path>) -> Lines {
    let path = path.as_ref().to_path_buf();
    let reader = match File::open(&path) {
        Ok(file) => Some(BufReader::new(file)),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Failed to open file for reading lines");
            None
        }
    };
    Lines::with_reader(path, reader)
}

/// Create a sequence over the lines of the file at `path`, reporting a
/// failure to open it.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let missing = try_lines("/definitely/not/here.txt");
/// assert!(matches!(missing, Err(SequenceError::Open { .. })));
/// ```
pub fn try_lines(path: impl AsRef<Path>) -> Result<Lines, SequenceError> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|source| SequenceError::Open {
        path: path.clone(),
        source,
    })?;
    Ok(Lines::with_reader(path, Some(BufReader::new(file))))
}

impl Lines {
    fn with_reader(path: PathBuf, reader: Option<BufReader<File>>) -> Self {
        Lines {
            path,
            reader,
            bytes: Vec::new(),
            line: String::new(),
            has_line: false,
        }
    }

    /// Path this sequence reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sequence for Lines {
    type Item = String;

    fn advance(&mut self) {
        self.line.clear();
        self.bytes.clear();
        let Some(reader) = self.reader.as_mut() else {
            self.has_line = false;
            return;
        };

        self.has_line = match reader.read_until(b'\n', &mut self.bytes) {
            Ok(0) => false,
            Ok(_) => {
                if self.bytes.ends_with(b"\n") {
                    self.bytes.pop();
                    if self.bytes.ends_with(b"\r") {
                        self.bytes.pop();
                    }
                }
                // Invalid UTF-8 is replaced rather than ending the sequence.
                self.line.push_str(&String::from_utf8_lossy(&self.bytes));
                true
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "Failed to read line");
                false
            }
        };
    }

    fn get(&self) -> Option<&String> {
        self.has_line.then_some(&self.line)
    }
}

impl Restart for Lines {
    fn restart(&self) -> Self {
        tracing::debug!(path = %self.path.display(), "Reopening line source");
        lines(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_each_line_without_terminator() {
        let file = write_temp("alpha\nbeta\r\ngamma");
        let mut seq = lines(file.path());
        assert_eq!(seq.next().map(String::as_str), Some("alpha"));
        assert_eq!(seq.next().map(String::as_str), Some("beta"));
        assert_eq!(seq.next().map(String::as_str), Some("gamma"));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_blank_lines_are_items() {
        let file = write_temp("a\n\nb\n");
        let items: Vec<String> = lines(file.path()).collect();
        assert_eq!(items, vec!["a", "", "b"]);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_sequence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"one\n\xff\xfe\nthree\nfour\n").unwrap();
        file.flush().unwrap();

        let items: Vec<String> = lines(file.path()).collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], "one");
        assert_eq!(items[1], "\u{FFFD}\u{FFFD}");
        assert_eq!(items[2], "three");
        assert_eq!(items[3], "four");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut seq = lines(dir.path().join("missing.txt"));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_try_lines_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match try_lines(&path) {
            Err(SequenceError::Open { path: reported, .. }) => assert_eq!(reported, path),
            Ok(_) => panic!("expected open error"),
        }
    }

    #[test]
    fn test_restart_reopens_from_beginning() {
        let file = write_temp("one\ntwo\n");
        let mut seq = try_lines(file.path()).unwrap();
        assert_eq!(seq.next().map(String::as_str), Some("one"));

        let mut fresh = seq.restart();
        assert_eq!(fresh.next().map(String::as_str), Some("one"));
        assert_eq!(seq.next().map(String::as_str), Some("two"));
        assert_eq!(fresh.next().map(String::as_str), Some("two"));
    }

    #[test]
    fn test_cycle_over_file() {
        let file = write_temp("x\ny\n");
        let items: Vec<String> = lines(file.path()).cycle().take(5).collect();
        assert_eq!(items, vec!["x", "y", "x", "y", "x"]);
    }
}
