//! Tests for store construction and configuration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use language_wizard::{StoreConfig, StoreError, TranslationStore};

// =========================================================================
// TranslationStore::new
// =========================================================================

#[test]
fn new_sets_language_and_words() {
    let store = TranslationStore::new("en", [("hi", "Hello")]).unwrap();

    assert_eq!(store.language(), "en");
    assert_eq!(store.lookup("hi", ""), "Hello");
    assert!(!store.is_closed());
}

#[test]
fn new_copies_the_input_map() {
    let mut words = HashMap::new();
    words.insert("hi".to_string(), "Hello".to_string());
    words.insert("bye".to_string(), "Goodbye".to_string());

    let store = TranslationStore::new("en", words.clone()).unwrap();
    words.insert("hi".to_string(), "CHANGED".to_string());

    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup("hi", ""), "Hello");
}

#[test]
fn new_borrows_from_a_map_reference() {
    let words = HashMap::from([("hi".to_string(), "Hello".to_string())]);
    let store = TranslationStore::new("en", &words).unwrap();

    assert_eq!(store.words(), words);
}

#[test]
fn new_rejects_empty_language() {
    let result = TranslationStore::new("", [("k", "v")]);
    assert_eq!(result.unwrap_err(), StoreError::InvalidLanguage);
}

#[test]
fn new_rejects_empty_words() {
    let result = TranslationStore::new("en", HashMap::<String, String>::new());
    assert_eq!(result.unwrap_err(), StoreError::InvalidWords);

    let result = TranslationStore::new("en", Vec::<(&str, &str)>::new());
    assert_eq!(result.unwrap_err(), StoreError::InvalidWords);
}

#[test]
fn empty_language_is_reported_before_empty_words() {
    let result = TranslationStore::new("", Vec::<(&str, &str)>::new());
    assert_eq!(result.unwrap_err(), StoreError::InvalidLanguage);
}

// =========================================================================
// StoreConfig
// =========================================================================

#[test]
fn config_opens_store() {
    let store = StoreConfig::builder()
        .language("uk")
        .words(HashMap::from([("hi".to_string(), "Привіт".to_string())]))
        .build()
        .open()
        .unwrap();

    assert_eq!(store.language(), "uk");
    assert_eq!(store.lookup("hi", ""), "Привіт");
}

#[test]
fn config_installs_logger() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    let store = StoreConfig::builder()
        .language("en")
        .words(HashMap::from([("hi".to_string(), "Hello".to_string())]))
        .logger(Arc::new(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .build()
        .open()
        .unwrap();

    assert_eq!(store.lookup("missing", "D"), "D");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn config_validates_like_new() {
    let result = StoreConfig::builder()
        .language("")
        .words(HashMap::from([("hi".to_string(), "Hello".to_string())]))
        .build()
        .open();
    assert_eq!(result.unwrap_err(), StoreError::InvalidLanguage);

    let result = StoreConfig::builder()
        .language("en")
        .words(HashMap::new())
        .build()
        .open();
    assert_eq!(result.unwrap_err(), StoreError::InvalidWords);
}

// =========================================================================
// Error messages
// =========================================================================

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        StoreError::InvalidLanguage.to_string(),
        "language code is required"
    );
    assert_eq!(
        StoreError::InvalidWords.to_string(),
        "word map must contain at least one entry"
    );
    assert_eq!(
        StoreError::AlreadySet {
            language: "en".to_string()
        }
        .to_string(),
        "language 'en' is already set"
    );
    assert_eq!(StoreError::Closed.to_string(), "translation store is closed");
}
