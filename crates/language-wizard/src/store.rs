//! The translation store.
//!
//! [`TranslationStore`] holds the active language code together with its
//! word map. Readers share a read lock, mutators serialize on the write
//! lock, and observers block in [`TranslationStore::wait`] until the next
//! replace or close.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::event::Event;
use crate::signal::ChangeSignal;

/// Diagnostic callback invoked with a message for every missed lookup.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// The active language and its word map, read together under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub language: String,
    pub words: HashMap<String, String>,
}

struct State {
    language: String,
    words: HashMap<String, String>,
    closed: bool,
    logger: Logger,
}

/// Thread-safe holder for the current language and its translations.
///
/// Share it between threads by reference or behind an [`Arc`]. Every word
/// map passed in is copied into the store and every map handed out is a
/// fresh copy, so callers can never alias internal state.
///
/// # Example
///
/// ```
/// use language_wizard::{Event, TranslationStore};
///
/// let store = TranslationStore::new("en", [("hi", "Hello")]).unwrap();
/// assert_eq!(store.lookup("hi", "x"), "Hello");
///
/// store.replace("fr", [("hi", "Bonjour")]).unwrap();
/// assert_eq!(store.lookup("hi", "x"), "Bonjour");
///
/// store.close();
/// assert!(store.words().is_empty());
/// assert_eq!(store.wait(), Event::Close);
/// ```
pub struct TranslationStore {
    state: RwLock<State>,
    signal: ChangeSignal,
}

impl TranslationStore {
    /// Create a store for `language` with a copy of `words`.
    ///
    /// Fails with [`StoreError::InvalidLanguage`] if `language` is empty and
    /// with [`StoreError::InvalidWords`] if `words` yields no entries.
    pub fn new<L, I, K, V>(language: L, words: I) -> Result<Self, StoreError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_logger(language, words, None)
    }

    pub(crate) fn with_logger<L, I, K, V>(
        language: L,
        words: I,
        logger: Option<Logger>,
    ) -> Result<Self, StoreError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (language, words) = validate(language, words)?;
        tracing::debug!(language = %language, words = words.len(), "Translation store created");

        Ok(Self {
            state: RwLock::new(State {
                language,
                words,
                closed: false,
                logger: logger.unwrap_or_else(noop_logger),
            }),
            signal: ChangeSignal::new(),
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the current language code.
    pub fn language(&self) -> String {
        self.read().language.clone()
    }

    /// Get a copy of the current word map.
    ///
    /// Empty once the store is closed.
    pub fn words(&self) -> HashMap<String, String> {
        self.read().words.clone()
    }

    /// Get the language and a copy of its word map from the same moment.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.read();
        Snapshot {
            language: state.language.clone(),
            words: state.words.clone(),
        }
    }

    /// Look up the translation for `key`, falling back to `default`.
    ///
    /// An empty key returns `default` without touching the store. A key
    /// with no translation is reported once to the diagnostic logger as
    /// `undef: <key>`. The logger runs after the lock is released, so it may
    /// call back into the store.
    pub fn lookup(&self, key: &str, default: &str) -> String {
        if key.is_empty() {
            return default.to_owned();
        }

        let logger = {
            let state = self.read();
            if let Some(value) = state.words.get(key) {
                return value.clone();
            }
            Arc::clone(&state.logger)
        };

        tracing::trace!(key, "Missing translation key");
        logger(&format!("undef: {key}"));
        default.to_owned()
    }

    /// Whether `key` has a translation. Never invokes the logger.
    pub fn contains(&self, key: &str) -> bool {
        self.read().words.contains_key(key)
    }

    /// Number of entries in the current word map.
    pub fn len(&self) -> usize {
        self.read().words.len()
    }

    /// Whether the current word map is empty, which only happens after close.
    pub fn is_empty(&self) -> bool {
        self.read().words.is_empty()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.read().closed
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Switch to `language` with a copy of `words` and wake all waiters.
    ///
    /// Input validation matches [`new`](Self::new). Fails with
    /// [`StoreError::Closed`] after close and with
    /// [`StoreError::AlreadySet`] when `language` is already active; the
    /// store is left untouched in both cases.
    pub fn replace<L, I, K, V>(&self, language: L, words: I) -> Result<(), StoreError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (language, words) = validate(language, words)?;

        let mut state = self.write();
        if state.closed {
            return Err(StoreError::Closed);
        }
        if state.language == language {
            return Err(StoreError::AlreadySet { language });
        }

        tracing::debug!(
            from = %state.language,
            to = %language,
            words = words.len(),
            "Language replaced"
        );
        state.language = language;
        state.words = words;

        // Still under the write lock: the swap and the wakeup are one step.
        self.signal.trip();
        Ok(())
    }

    /// Replace the diagnostic logger.
    ///
    /// The default logger does nothing.
    pub fn set_logger<F>(&self, logger: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.write().logger = Arc::new(logger);
    }

    /// Close the store: clear the word map and wake every waiter for good.
    ///
    /// Calling it again does nothing.
    pub fn close(&self) {
        let mut state = self.write();
        if state.closed {
            return;
        }

        state.closed = true;
        state.words = HashMap::new();
        self.signal.close();
        tracing::debug!(language = %state.language, "Translation store closed");
    }

    // =========================================================================
    // Change Notification
    // =========================================================================

    /// Block until the next replace or close.
    ///
    /// Returns [`Event::Close`] immediately if the store is already closed.
    /// No store lock is held while blocked, so slow waiters never delay
    /// mutators. There is no timeout; run the wait on its own thread and
    /// race it against a timer if one is needed.
    pub fn wait(&self) -> Event {
        self.signal.wait()
    }

    /// Block like [`wait`](Self::wait) and report whether the store closed.
    pub fn wait_and_close(&self) -> bool {
        self.wait().is_close()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("TranslationStore")
            .field("language", &state.language)
            .field("words", &state.words.len())
            .field("closed", &state.closed)
            .finish_non_exhaustive()
    }
}

fn noop_logger() -> Logger {
    Arc::new(|_: &str| {})
}

/// Check and copy construction or replace inputs.
fn validate<L, I, K, V>(
    language: L,
    words: I,
) -> Result<(String, HashMap<String, String>), StoreError>
where
    L: Into<String>,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let language = language.into();
    if language.is_empty() {
        return Err(StoreError::InvalidLanguage);
    }

    let words: HashMap<String, String> = words
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();
    if words.is_empty() {
        return Err(StoreError::InvalidWords);
    }

    Ok((language, words))
}
