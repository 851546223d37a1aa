//! Answer grading.
//!
//! Typing answers match case- and surrounding-whitespace-insensitively;
//! multiple-choice answers must match the option string verbatim.
//! No partial credit, no fuzzy matching.

use crate::types::{QuestionKind, QuizQuestion};

/// Grade a submitted answer against a question.
pub fn grade(question: &QuizQuestion, submitted: &str) -> bool {
    match &question.kind {
        QuestionKind::Typing { correct_answer } => {
            normalize_typed(submitted) == normalize_typed(correct_answer)
        }
        QuestionKind::MultipleChoice { correct_answer, .. } => submitted == correct_answer,
    }
}

/// Normalize a typed answer for comparison (trim and lower-case).
pub fn normalize_typed(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typing(answer: &str) -> QuizQuestion {
        QuizQuestion {
            id: "1".into(),
            prompt: "Type the translation of \"Xin chào\"".into(),
            kind: QuestionKind::Typing {
                correct_answer: answer.into(),
            },
        }
    }

    fn choice(answer: &str) -> QuizQuestion {
        QuizQuestion {
            id: "1".into(),
            prompt: "What does \"Xin chào\" mean?".into(),
            kind: QuestionKind::MultipleChoice {
                options: vec![answer.into(), "Goodbye".into(), "Water".into(), "Rice".into()],
                correct_answer: answer.into(),
            },
        }
    }

    #[test]
    fn test_typing_ignores_case_and_whitespace() {
        let q = typing("hello");
        assert!(grade(&q, "hello"));
        assert!(grade(&q, "HeLLo"));
        assert!(grade(&q, "  hello \n"));
        assert_eq!(grade(&q, " Hello "), grade(&q, "hello"));
    }

    #[test]
    fn test_typing_rejects_wrong_text() {
        let q = typing("thank you");
        assert!(!grade(&q, "thankyou"));
        assert!(!grade(&q, "thank  you"));
        assert!(!grade(&q, ""));
    }

    #[test]
    fn test_multiple_choice_is_exact() {
        let q = choice("Hello");
        assert!(grade(&q, "Hello"));
        assert!(!grade(&q, "hello"));
        assert!(!grade(&q, " Hello"));
        assert!(!grade(&q, "Goodbye"));
    }

    #[test]
    fn test_normalize_typed() {
        assert_eq!(normalize_typed("  How Are You? "), "how are you?");
    }
}
