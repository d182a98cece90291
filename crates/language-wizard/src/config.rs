//! Construction-time options for [`TranslationStore`].

use std::collections::HashMap;
use std::fmt;

use bon::Builder;

use crate::error::StoreError;
use crate::store::{Logger, TranslationStore};

/// Options for opening a [`TranslationStore`].
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// use language_wizard::StoreConfig;
///
/// let words = HashMap::from([("hi".to_string(), "Hello".to_string())]);
/// let store = StoreConfig::builder()
///     .language("en")
///     .words(words)
///     .logger(Arc::new(|message: &str| eprintln!("{message}")))
///     .build()
///     .open()
///     .unwrap();
///
/// assert_eq!(store.language(), "en");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct StoreConfig {
    /// Initial language code (e.g., "en", "uk", "de").
    language: String,

    /// Initial word map. Copied into the store on open.
    words: HashMap<String, String>,

    /// Diagnostic logger for missed lookups. Defaults to a no-op.
    logger: Option<Logger>,
}

impl StoreConfig {
    /// Validate the options and create the store.
    ///
    /// Fails exactly like [`TranslationStore::new`].
    pub fn open(self) -> Result<TranslationStore, StoreError> {
        TranslationStore::with_logger(self.language, self.words, self.logger)
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("language", &self.language)
            .field("words", &self.words)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
