//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors surfaced by the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("vocabulary pool is empty")]
    EmptyPool,

    #[error("no quiz in progress")]
    NotStarted,

    #[error("quiz already completed")]
    QuizCompleted,

    #[error("answer is empty")]
    EmptyAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(QuizError::EmptyPool.to_string(), "vocabulary pool is empty");
        assert_eq!(QuizError::QuizCompleted.to_string(), "quiz already completed");
    }
}
