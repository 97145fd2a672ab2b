//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::embedded_dictionary;
use crate::core::Dictionary;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Name that selects the embedded word list in `load_dictionary`
pub const EMBEDDED: &str = "embedded";

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and lowercased; blank lines, invalid entries and
/// duplicates are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_optimizer::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = Dictionary::from_lines(content.trim_start_matches('\u{feff}').lines());
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}

/// Resolve a `--wordlist` argument: `embedded` or a file path
///
/// # Errors
///
/// Returns an I/O error if a file path was given and cannot be read.
pub fn load_dictionary(source: &str) -> io::Result<Dictionary> {
    if source.eq_ignore_ascii_case(EMBEDDED) {
        Ok(embedded_dictionary())
    } else {
        load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_wordlist(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_optimizer_{name}_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_file_skips_invalid_lines() {
        let path = temp_wordlist("invalid", "crane\n\n  SLATE \ntoolong\nabc\ncrane\nir4te\n");
        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = dictionary.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_file_strips_byte_order_mark() {
        let path = temp_wordlist("bom", "\u{feff}crane\nslate\n");
        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = dictionary.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn load_dictionary_embedded() {
        let dictionary = load_dictionary("embedded").unwrap();
        assert_eq!(dictionary.len(), embedded_dictionary().len());
    }

    #[test]
    fn load_dictionary_from_path() {
        let path = temp_wordlist("path", "fuzzy\njazzy\n");
        let dictionary = load_dictionary(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_str("jazzy"));
    }
}
