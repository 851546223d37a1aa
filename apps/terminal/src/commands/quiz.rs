//! Quiz session commands.

use crate::state::AppState;
use crate::vocabulary::VocabularySource;
use quiz_core::{
    default_vocabulary, QuizError, QuizKind, QuizQuestion, QuizResult, QuizSession,
    SessionStatus,
};
use tracing::info;

use super::{lock, CommandError};

/// Snapshot of the session for the quiz screen.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct QuizStatus {
    pub status: SessionStatus,
    pub kind: Option<QuizKind>,
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
    pub completed: bool,
    pub progress: f64,
}

impl QuizStatus {
    fn of(session: &QuizSession) -> Self {
        Self {
            status: session.status(),
            kind: session.kind(),
            current_index: session.current_index(),
            total: session.total(),
            score: session.score(),
            completed: session.is_completed(),
            progress: session.progress(),
        }
    }
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubmitResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub status: QuizStatus,
}

/// Generate a new quiz from the chosen vocabulary list.
///
/// The built-in set is always passed as the distractor fallback.
pub async fn start_quiz(
    kind: QuizKind,
    source: VocabularySource,
    state: &AppState,
) -> Result<QuizStatus, CommandError> {
    let pool = state.vocabulary.quiz_pool(source).await;

    let mut rng = lock(&state.rng, "rng")?;
    let mut session = lock(&state.session, "session")?;
    session.start(pool, kind, Some(default_vocabulary()), &mut *rng)?;

    info!(kind = kind.as_str(), ?source, total = session.total(), "quiz started");
    Ok(QuizStatus::of(&session))
}

/// The question awaiting an answer.
pub async fn current_question(state: &AppState) -> Result<Option<QuizQuestion>, CommandError> {
    let session = lock(&state.session, "session")?;
    Ok(session.current_question().cloned())
}

/// Grade an answer for the current question and advance.
///
/// Blank answers and answers after completion are rejected.
pub async fn submit_answer(
    answer: String,
    state: &AppState,
) -> Result<SubmitResponse, CommandError> {
    if answer.trim().is_empty() {
        return Err(QuizError::EmptyAnswer.into());
    }

    let mut session = lock(&state.session, "session")?;
    let correct_answer = session
        .current_question()
        .map(|q| q.correct_answer().to_string())
        .unwrap_or_default();
    let correct = session.submit_answer(&answer)?;

    if session.is_completed() {
        info!(score = session.score(), total = session.total(), "quiz finished");
    }

    Ok(SubmitResponse {
        correct,
        correct_answer,
        status: QuizStatus::of(&session),
    })
}

/// Regenerate questions from the pool of the current quiz.
pub async fn restart_quiz(state: &AppState) -> Result<QuizStatus, CommandError> {
    let mut rng = lock(&state.rng, "rng")?;
    let mut session = lock(&state.session, "session")?;
    session.restart(&mut *rng)?;
    Ok(QuizStatus::of(&session))
}

/// Clear progress on the current question set.
pub async fn reset_quiz(state: &AppState) -> Result<QuizStatus, CommandError> {
    let mut session = lock(&state.session, "session")?;
    session.reset();
    Ok(QuizStatus::of(&session))
}

pub async fn get_quiz_result(state: &AppState) -> Result<QuizResult, CommandError> {
    let session = lock(&state.session, "session")?;
    Ok(session.result())
}

pub async fn quiz_status(state: &AppState) -> Result<QuizStatus, CommandError> {
    let session = lock(&state.session, "session")?;
    Ok(QuizStatus::of(&session))
}
