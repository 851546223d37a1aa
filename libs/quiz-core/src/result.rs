//! Result aggregation.

use crate::grading::grade;
use crate::session::QuizSession;
use crate::types::{QuizResult, WrongAnswer};

/// Recompute the score summary of a session from its submitted answers.
///
/// Only answered positions are graded; unanswered questions still count
/// towards `total`.
pub fn get_result(session: &QuizSession) -> QuizResult {
    let mut correct_answers = Vec::new();
    let mut wrong_answers = Vec::new();

    for (question, answer) in session.questions().iter().zip(session.submitted_answers()) {
        if grade(question, answer) {
            correct_answers.push(answer.clone());
        } else {
            wrong_answers.push(WrongAnswer {
                question: question.prompt.clone(),
                user_answer: answer.clone(),
                correct_answer: question.correct_answer().to_string(),
            });
        }
    }

    QuizResult {
        score: correct_answers.len(),
        total: session.total(),
        correct_answers,
        wrong_answers,
    }
}
