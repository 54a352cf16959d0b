//! Word list loading utilities

use super::{Dictionary, LengthFilter};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and lowercased; words outside `filter` are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use rack_forge::wordlists::LengthFilter;
/// use rack_forge::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt", LengthFilter::default()).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, filter: LengthFilter) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(content.lines(), filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_filters_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cat").unwrap();
        writeln!(file, "  act  ").unwrap();
        writeln!(file, "to").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "marvelous").unwrap();
        write!(file, "dog").unwrap();

        let dict = load_from_file(file.path(), LengthFilter::default()).unwrap();
        assert_eq!(dict.words(), ["cat", "act", "dog"]);
    }

    #[test]
    fn load_handles_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "cat\r\ndog\r\n").unwrap();

        let dict = load_from_file(file.path(), LengthFilter::default()).unwrap();
        assert_eq!(dict.words(), ["cat", "dog"]);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"), LengthFilter::default());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
