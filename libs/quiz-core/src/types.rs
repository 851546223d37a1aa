//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};

/// Difficulty level of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Default for Level {
    fn default() -> Self {
        Self::Basic
    }
}

impl Level {
    /// All levels in ascending difficulty.
    pub const ALL: [Level; 3] = [Self::Basic, Self::Intermediate, Self::Advanced];

    /// Get the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// A word pair: a native-language term and its target-language counterpart.
///
/// Entries are immutable once created; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    pub native: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub level: Level,
    pub category: String,
}

/// Kind of quiz requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    MultipleChoice,
    Typing,
}

impl QuizKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Typing => "typing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multiple-choice" => Some(Self::MultipleChoice),
            "typing" => Some(Self::Typing),
            _ => None,
        }
    }
}

/// Answer shape of a generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one of four display strings. `correct_answer` keeps its original casing.
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        options: Vec<String>,
        correct_answer: String,
    },
    /// Free-typed recall. `correct_answer` is stored lower-cased.
    #[serde(rename_all = "camelCase")]
    Typing { correct_answer: String },
}

/// A single quiz question derived from a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Id of the source vocabulary entry.
    pub id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> &str {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_answer, .. } => correct_answer,
            QuestionKind::Typing { correct_answer } => correct_answer,
        }
    }

    /// Display options; empty for typing questions.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::Typing { .. } => &[],
        }
    }

    pub fn quiz_kind(&self) -> QuizKind {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuizKind::MultipleChoice,
            QuestionKind::Typing { .. } => QuizKind::Typing,
        }
    }
}

/// An incorrectly answered question in a result summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongAnswer {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
}

/// Score summary of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub correct_answers: Vec<String>,
    pub wrong_answers: Vec<WrongAnswer>,
}
