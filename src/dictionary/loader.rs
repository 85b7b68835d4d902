//! Word list loading utilities
//!
//! Provides functions to read raw word lists from files or the embedded
//! constant. Normalization is left to `DictionaryIndex::build`.

use super::DictionaryError;
use super::embedded::REFERENCE_WORDS;
use std::fs;
use std::path::Path;

/// Load raw entries from a file
///
/// One word per line; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordvinder::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    log::info!("Read {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// The reference list compiled into the binary
///
/// # Errors
///
/// Never fails; the signature matches the other loaders.
pub fn load_reference_words() -> Result<Vec<String>, DictionaryError> {
    Ok(words_from_slice(REFERENCE_WORDS))
}

/// Convert an embedded string slice to owned entries
///
/// # Examples
/// ```
/// use wordvinder::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog"]);
/// assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
