//! Error types for the translation store.

use thiserror::Error;

/// Errors returned by store construction and mutation.
///
/// All variants are local validation or lifecycle failures. None of them are
/// transient, so retrying the same call without changing its inputs fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The language code was empty.
    #[error("language code is required")]
    InvalidLanguage,

    /// The word map had no entries.
    #[error("word map must contain at least one entry")]
    InvalidWords,

    /// Replace was asked to switch to the language that is already active.
    #[error("language '{language}' is already set")]
    AlreadySet { language: String },

    /// The store was closed and no longer accepts changes.
    #[error("translation store is closed")]
    Closed,
}
