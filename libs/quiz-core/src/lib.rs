//! Core vocabulary quiz engine shared by the front ends.
//!
//! Provides:
//! - Question generation with shuffled distractors (multiple choice, typing)
//! - Answer grading
//! - Quiz session state machine and result aggregation
//! - The built-in vocabulary set
//! - Shared types (VocabularyEntry, QuizQuestion, QuizResult, etc.)

pub mod data;
pub mod error;
pub mod generator;
pub mod grading;
pub mod result;
pub mod session;
pub mod shuffle;
pub mod types;

pub use data::default_vocabulary;
pub use error::{QuizError, Result};
pub use generator::{generate_questions, MAX_QUESTIONS, OPTION_COUNT};
pub use grading::grade;
pub use result::get_result;
pub use session::{QuizSession, SessionStatus};
pub use shuffle::shuffle;
pub use types::{
    Level, QuestionKind, QuizKind, QuizQuestion, QuizResult, VocabularyEntry, WrongAnswer,
};
