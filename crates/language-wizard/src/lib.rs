//! Thread-safe holder for the active language and its translation table.
//!
//! A [`TranslationStore`] keeps one language code and one key-to-text map.
//! Both are swapped together by [`TranslationStore::replace`], read through
//! copying accessors, and cleared by [`TranslationStore::close`]. Observers
//! block in [`TranslationStore::wait`] until the next change or shutdown.

mod config;
mod error;
mod event;
mod signal;
mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use event::Event;
pub use store::{Logger, Snapshot, TranslationStore};
