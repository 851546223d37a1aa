//! Application state.

use crate::store::SqliteStore;
use crate::vocabulary::VocabularyRepository;
use quiz_core::QuizSession;
use rand::rngs::StdRng;
use std::sync::Mutex;

/// State shared by the command layer.
pub struct AppState {
    pub vocabulary: VocabularyRepository<SqliteStore>,
    pub session: Mutex<QuizSession>,
    pub rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(store: SqliteStore, rng: StdRng) -> Self {
        Self {
            vocabulary: VocabularyRepository::new(store),
            session: Mutex::new(QuizSession::new()),
            rng: Mutex::new(rng),
        }
    }
}
