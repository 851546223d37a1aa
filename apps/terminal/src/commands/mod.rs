//! Commands exposed to the front end.

pub mod quiz;
pub mod vocabulary;

use std::sync::{Mutex, MutexGuard};

pub use quiz::{
    current_question, get_quiz_result, quiz_status, reset_quiz, restart_quiz, start_quiz,
    submit_answer, QuizStatus, SubmitResponse,
};
pub use vocabulary::{add_vocabulary, delete_vocabulary, list_vocabulary};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::vocabulary::VocabularyError> for CommandError {
    fn from(e: crate::vocabulary::VocabularyError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<crate::store::StoreError> for CommandError {
    fn from(e: crate::store::StoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<quiz_core::QuizError> for CommandError {
    fn from(e: quiz_core::QuizError) -> Self {
        Self { message: e.to_string() }
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, CommandError> {
    mutex.lock().map_err(|_| CommandError {
        message: format!("{} lock poisoned", name),
    })
}
