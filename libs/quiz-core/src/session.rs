//! Quiz session state machine.
//!
//! `NotStarted -> InProgress -> Completed`, with `restart` going from any
//! started state back to a fresh `InProgress` quiz. The session owns the
//! pool it was started from so a restart can draw a new question set.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QuizError, Result};
use crate::generator::generate_questions;
use crate::grading::grade;
use crate::result::get_result;
use crate::types::{QuizKind, QuizQuestion, QuizResult, VocabularyEntry};

/// Lifecycle state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Inputs a session was generated from.
#[derive(Debug, Clone)]
struct QuizSource {
    pool: Vec<VocabularyEntry>,
    kind: QuizKind,
    fallback: Option<Vec<VocabularyEntry>>,
}

/// A single user's quiz run.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    source: Option<QuizSource>,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    submitted_answers: Vec<String>,
    completed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a question set and start a fresh run.
    ///
    /// Any prior run is discarded. On error the session is left untouched.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        pool: Vec<VocabularyEntry>,
        kind: QuizKind,
        fallback: Option<Vec<VocabularyEntry>>,
        rng: &mut R,
    ) -> Result<()> {
        let questions = generate_questions(&pool, kind, fallback.as_deref(), rng)?;
        self.source = Some(QuizSource {
            pool,
            kind,
            fallback,
        });
        self.begin(questions);
        Ok(())
    }

    /// Draw a new question set from the pool the session was started with.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let source = self.source.as_ref().ok_or(QuizError::NotStarted)?;
        let questions = generate_questions(
            &source.pool,
            source.kind,
            source.fallback.as_deref(),
            rng,
        )?;
        self.begin(questions);
        Ok(())
    }

    /// Clear progress but keep the current question set.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.submitted_answers.clear();
        self.completed = false;
    }

    fn begin(&mut self, questions: Vec<QuizQuestion>) {
        debug!(questions = questions.len(), "quiz started");
        self.questions = questions;
        self.reset();
    }

    /// Grade `answer` against the current question and advance.
    ///
    /// The raw answer is recorded as submitted. Returns whether it was correct.
    pub fn submit_answer(&mut self, answer: &str) -> Result<bool> {
        match self.status() {
            SessionStatus::NotStarted => return Err(QuizError::NotStarted),
            SessionStatus::Completed => return Err(QuizError::QuizCompleted),
            SessionStatus::InProgress => {}
        }

        let question = &self.questions[self.current_index];
        let correct = grade(question, answer);
        if correct {
            self.score += 1;
        }
        self.submitted_answers.push(answer.to_string());

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.completed = true;
            debug!(score = self.score, total = self.questions.len(), "quiz completed");
        }

        Ok(correct)
    }

    pub fn status(&self) -> SessionStatus {
        if self.questions.is_empty() {
            SessionStatus::NotStarted
        } else if self.completed {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    /// The question awaiting an answer, or the last one once completed.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn submitted_answers(&self) -> &[String] {
        &self.submitted_answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn kind(&self) -> Option<QuizKind> {
        self.source.as_ref().map(|s| s.kind)
    }

    /// Position of the current question as a percentage of the quiz.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn result(&self) -> QuizResult {
        get_result(self)
    }
}
