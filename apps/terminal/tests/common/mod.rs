//! Common test utilities for integration tests.

#![allow(dead_code)]

use quiz_core::Level;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_quiz_lib::state::AppState;
use vocab_quiz_lib::store::SqliteStore;
use vocab_quiz_lib::vocabulary::NewVocabulary;

/// App state over an in-memory store with a fixed seed.
pub fn test_state() -> AppState {
    let store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    AppState::new(store, StdRng::seed_from_u64(1234))
}

pub fn new_word(native: &str, target: &str) -> NewVocabulary {
    NewVocabulary {
        native: native.to_string(),
        target: target.to_string(),
        pronunciation: None,
        level: Some(Level::Basic),
        category: Some("Test".to_string()),
    }
}
