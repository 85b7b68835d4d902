//! Single-flight, process-wide dictionary handle
//!
//! The first caller loads and builds the index; concurrent first callers block
//! on that same construction and every caller observes the same index. After
//! that, reads are lock-free.

use super::{DictionaryError, DictionaryIndex};
use once_cell::sync::OnceCell;

/// Lazily built dictionary shared across threads
#[derive(Debug, Default)]
pub struct SharedDictionary {
    cell: OnceCell<DictionaryIndex>,
}

impl SharedDictionary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the index, loading and building it on first use
    ///
    /// `load` runs at most once per successful initialization. If it fails
    /// the cell stays empty and the error is returned; the next caller may
    /// try again with its own loader.
    ///
    /// # Errors
    ///
    /// Propagates the loader's `DictionaryError`.
    ///
    /// # Examples
    /// ```
    /// use wordvinder::dictionary::SharedDictionary;
    ///
    /// let shared = SharedDictionary::new();
    /// let index = shared
    ///     .get_or_load(|| Ok(vec!["cat".to_string(), "act".to_string()]))
    ///     .unwrap();
    /// assert_eq!(index.len(), 2);
    ///
    /// // Later loaders are never invoked
    /// let again = shared.get_or_load(|| unreachable!()).unwrap();
    /// assert!(std::ptr::eq(index, again));
    /// ```
    pub fn get_or_load<F>(&self, load: F) -> Result<&DictionaryIndex, DictionaryError>
    where
        F: FnOnce() -> Result<Vec<String>, DictionaryError>,
    {
        self.cell.get_or_try_init(|| {
            log::debug!("Dictionary not built yet, loading word list");
            let raw = load().inspect_err(|e| log::warn!("Dictionary load failed: {e}"))?;
            let index = DictionaryIndex::build(&raw);
            log::info!("Dictionary ready with {} words", index.len());
            Ok(index)
        })
    }

    /// The built index, or `Unavailable` if nothing has loaded it yet
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` before a successful load.
    pub fn index(&self) -> Result<&DictionaryIndex, DictionaryError> {
        self.cell.get().ok_or_else(|| DictionaryError::Unavailable {
            reason: "dictionary has not been loaded".to_string(),
        })
    }

    /// True once the index has been built
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}
