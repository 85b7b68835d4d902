//! Reference dictionary for every puzzle helper
//!
//! Raw word lists come from a loader (embedded or file), get normalized into a
//! [`DictionaryIndex`], and live for the rest of the process behind a
//! [`SharedDictionary`].

mod embedded;
mod index;
pub mod loader;
mod shared;

pub use embedded::{REFERENCE_WORDS, REFERENCE_WORDS_COUNT};
pub use index::DictionaryIndex;
pub use shared::SharedDictionary;

/// Raised when no dictionary can be consulted
///
/// Callers should show this as its own state, distinct from a query that
/// simply matched nothing.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Failed to read word list {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

static GLOBAL: SharedDictionary = SharedDictionary::new();

/// The process-wide dictionary slot
///
/// # Examples
/// ```
/// use wordvinder::dictionary::{self, loader};
///
/// let index = dictionary::global()
///     .get_or_load(loader::load_reference_words)
///     .unwrap();
/// assert!(index.contains("crane"));
/// ```
#[must_use]
pub fn global() -> &'static SharedDictionary {
    &GLOBAL
}
