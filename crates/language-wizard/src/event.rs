//! Events reported to observers blocked in [`TranslationStore::wait`].
//!
//! [`TranslationStore::wait`]: crate::TranslationStore::wait

use std::fmt;

/// What woke a waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The store was closed. Every later wait reports this immediately.
    Close,
    /// A replace switched the active language and word map.
    LanguageChanged,
}

impl Event {
    /// Returns true for [`Event::Close`].
    pub fn is_close(self) -> bool {
        self == Event::Close
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Close => write!(f, "close"),
            Event::LanguageChanged => write!(f, "language changed"),
        }
    }
}
