//! Question generation.
//!
//! A quiz is at most [`MAX_QUESTIONS`] entries sampled without replacement
//! from the pool. Multiple-choice questions carry [`OPTION_COUNT`] options:
//! the correct target plus distractors drawn from the rest of the pool,
//! topped up from a fallback pool when the primary pool is too small.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::error::{QuizError, Result};
use crate::shuffle::{sample, shuffle};
use crate::types::{QuestionKind, QuizKind, QuizQuestion, VocabularyEntry};

/// Maximum number of questions in one quiz.
pub const MAX_QUESTIONS: usize = 10;

/// Number of options shown for a multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Random draws allowed when collecting distractors before falling back to a scan.
const MAX_DISTRACTOR_ATTEMPTS: usize = 50;

/// Generate a fresh question set from `pool`.
///
/// Entries sharing an id are collapsed to their first occurrence, so no two
/// questions come from the same source entry. `fallback` is only consulted
/// for distractors, and only when the pool has fewer than [`OPTION_COUNT`]
/// entries.
///
/// Returns [`QuizError::EmptyPool`] when `pool` is empty.
pub fn generate_questions<R: Rng + ?Sized>(
    pool: &[VocabularyEntry],
    kind: QuizKind,
    fallback: Option<&[VocabularyEntry]>,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>> {
    let pool = unique_by_id(pool);
    if pool.is_empty() {
        return Err(QuizError::EmptyPool);
    }

    let count = pool.len().min(MAX_QUESTIONS);
    let selected = sample(&pool, count, rng);

    let extra = match (kind, fallback) {
        (QuizKind::MultipleChoice, Some(fallback)) if pool.len() < OPTION_COUNT => {
            fallback_candidates(&pool, fallback)
        }
        _ => Vec::new(),
    };

    let questions = selected
        .into_iter()
        .map(|word| match kind {
            QuizKind::MultipleChoice => {
                let candidates: Vec<&VocabularyEntry> = pool
                    .iter()
                    .copied()
                    .filter(|w| w.id != word.id)
                    .chain(extra.iter().copied())
                    .collect();
                multiple_choice(word, &candidates, rng)
            }
            QuizKind::Typing => typing(word),
        })
        .collect::<Vec<_>>();

    debug!(
        count = questions.len(),
        kind = kind.as_str(),
        pool = pool.len(),
        fallback = extra.len(),
        "generated quiz questions"
    );

    Ok(questions)
}

/// Prompt text shown for an entry.
pub fn prompt_for(kind: QuizKind, native: &str) -> String {
    match kind {
        QuizKind::MultipleChoice => format!("What does \"{}\" mean?", native),
        QuizKind::Typing => format!("Type the translation of \"{}\"", native),
    }
}

fn unique_by_id(pool: &[VocabularyEntry]) -> Vec<&VocabularyEntry> {
    let mut seen = HashSet::new();
    pool.iter().filter(|w| seen.insert(w.id.as_str())).collect()
}

/// Fallback entries whose target text does not already appear in the pool.
fn fallback_candidates<'a>(
    pool: &[&VocabularyEntry],
    fallback: &'a [VocabularyEntry],
) -> Vec<&'a VocabularyEntry> {
    let taken: HashSet<String> = pool.iter().map(|w| w.target.to_lowercase()).collect();
    fallback
        .iter()
        .filter(|w| !taken.contains(&w.target.to_lowercase()))
        .collect()
}

fn typing(word: &VocabularyEntry) -> QuizQuestion {
    QuizQuestion {
        id: word.id.clone(),
        prompt: prompt_for(QuizKind::Typing, &word.native),
        kind: QuestionKind::Typing {
            correct_answer: word.target.trim().to_lowercase(),
        },
    }
}

fn multiple_choice<R: Rng + ?Sized>(
    word: &VocabularyEntry,
    candidates: &[&VocabularyEntry],
    rng: &mut R,
) -> QuizQuestion {
    let mut options = vec![word.target.clone()];

    let mut attempts = 0;
    while options.len() < OPTION_COUNT
        && attempts < MAX_DISTRACTOR_ATTEMPTS
        && !candidates.is_empty()
    {
        attempts += 1;
        let pick = candidates[rng.gen_range(0..candidates.len())];
        if !options.contains(&pick.target) {
            options.push(pick.target.clone());
        }
    }

    // Random draws ran out: take any distinct candidate left.
    for candidate in candidates {
        if options.len() >= OPTION_COUNT {
            break;
        }
        if !options.contains(&candidate.target) {
            options.push(candidate.target.clone());
        }
    }

    // Fewer than OPTION_COUNT distinct strings exist: pad with repeats.
    if options.len() < OPTION_COUNT {
        debug!(
            id = %word.id,
            distinct = options.len(),
            "not enough distinct distractors, padding with repeats"
        );
        let filler: Vec<String> = if candidates.is_empty() {
            vec![word.target.clone()]
        } else {
            candidates.iter().map(|w| w.target.clone()).collect()
        };
        let mut next = 0;
        while options.len() < OPTION_COUNT {
            options.push(filler[next % filler.len()].clone());
            next += 1;
        }
    }

    shuffle(&mut options, rng);

    QuizQuestion {
        id: word.id.clone(),
        prompt: prompt_for(QuizKind::MultipleChoice, &word.native),
        kind: QuestionKind::MultipleChoice {
            options,
            correct_answer: word.target.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_vocabulary;
    use crate::types::Level;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(id: &str, native: &str, target: &str) -> VocabularyEntry {
        VocabularyEntry {
            id: id.to_string(),
            native: native.to_string(),
            target: target.to_string(),
            pronunciation: None,
            level: Level::Basic,
            category: "General".to_string(),
        }
    }

    fn pool(n: usize) -> Vec<VocabularyEntry> {
        (0..n)
            .map(|i| entry(&i.to_string(), &format!("native {}", i), &format!("Target {}", i)))
            .collect()
    }

    fn assert_distinct(options: &[String]) {
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), options.len(), "options not distinct: {:?}", options);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_questions(&[], QuizKind::Typing, None, &mut rng);
        assert_eq!(result, Err(QuizError::EmptyPool));
    }

    #[test]
    fn question_count_is_capped_at_ten() {
        let mut rng = StdRng::seed_from_u64(1);
        for size in [1, 3, 4, 9, 10, 11, 25] {
            let questions =
                generate_questions(&pool(size), QuizKind::Typing, None, &mut rng).unwrap();
            assert_eq!(questions.len(), size.min(MAX_QUESTIONS));
        }
    }

    #[test]
    fn questions_never_share_a_source_entry() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions =
                generate_questions(&pool(15), QuizKind::MultipleChoice, None, &mut rng).unwrap();
            let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            assert_eq!(ids.len(), questions.len());
        }
    }

    #[test]
    fn duplicate_ids_in_pool_are_collapsed() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut words = pool(3);
        words.push(entry("0", "again", "Again"));
        let questions = generate_questions(&words, QuizKind::Typing, None, &mut rng).unwrap();
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn multiple_choice_has_four_distinct_options_with_answer() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions =
                generate_questions(&pool(12), QuizKind::MultipleChoice, None, &mut rng).unwrap();
            for q in &questions {
                assert_eq!(q.options().len(), OPTION_COUNT);
                assert_distinct(q.options());
                assert!(q.options().iter().any(|o| o == q.correct_answer()));
            }
        }
    }

    #[test]
    fn exactly_four_entries_use_all_other_targets() {
        let mut rng = StdRng::seed_from_u64(9);
        let words = pool(4);
        let questions =
            generate_questions(&words, QuizKind::MultipleChoice, None, &mut rng).unwrap();
        for q in &questions {
            let mut options = q.options().to_vec();
            options.sort();
            let mut targets: Vec<String> = words.iter().map(|w| w.target.clone()).collect();
            targets.sort();
            assert_eq!(options, targets);
        }
    }

    #[test]
    fn small_pool_draws_distractors_from_fallback() {
        let mut rng = StdRng::seed_from_u64(2);
        let words = vec![entry("a", "Xin chào", "Hello"), entry("b", "Nước", "Water")];
        let fallback = default_vocabulary();
        let questions =
            generate_questions(&words, QuizKind::MultipleChoice, Some(&fallback), &mut rng)
                .unwrap();
        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert_eq!(q.options().len(), OPTION_COUNT);
            assert_distinct(q.options());
            assert!(q.options().iter().any(|o| o == q.correct_answer()));
        }
    }

    #[test]
    fn fallback_skips_targets_already_in_pool() {
        let words = vec![entry("a", "x", "Hello")];
        let words: Vec<&VocabularyEntry> = words.iter().collect();
        let fallback = vec![
            entry("f1", "y", "hello"),
            entry("f2", "z", "Goodbye"),
            entry("f3", "w", "HELLO"),
        ];
        let extra = fallback_candidates(&words, &fallback);
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].target, "Goodbye");
    }

    #[test]
    fn fallback_ignored_for_large_pools() {
        let mut rng = StdRng::seed_from_u64(4);
        let words = pool(5);
        let fallback = vec![entry("f", "f", "From fallback")];
        for _ in 0..20 {
            let questions =
                generate_questions(&words, QuizKind::MultipleChoice, Some(&fallback), &mut rng)
                    .unwrap();
            assert!(questions
                .iter()
                .all(|q| !q.options().contains(&"From fallback".to_string())));
        }
    }

    #[test]
    fn three_entries_without_fallback_still_get_four_options() {
        let mut rng = StdRng::seed_from_u64(11);
        let questions =
            generate_questions(&pool(3), QuizKind::MultipleChoice, None, &mut rng).unwrap();
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert_eq!(q.options().len(), OPTION_COUNT);
            assert!(q.options().iter().any(|o| o == q.correct_answer()));
            let unique: HashSet<&String> = q.options().iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn single_entry_pool_terminates() {
        let mut rng = StdRng::seed_from_u64(0);
        let questions =
            generate_questions(&pool(1), QuizKind::MultipleChoice, None, &mut rng).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options().len(), OPTION_COUNT);
        assert!(questions[0].options().iter().all(|o| o == "Target 0"));
    }

    #[test]
    fn typing_answer_is_lower_cased_and_has_no_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = vec![entry("1", "Cảm ơn", "Thank You")];
        let questions = generate_questions(&words, QuizKind::Typing, None, &mut rng).unwrap();
        assert_eq!(questions[0].correct_answer(), "thank you");
        assert!(questions[0].options().is_empty());
        assert!(questions[0].prompt.contains("Cảm ơn"));
    }

    #[test]
    fn multiple_choice_keeps_original_casing() {
        let mut rng = StdRng::seed_from_u64(3);
        let questions =
            generate_questions(&default_vocabulary(), QuizKind::MultipleChoice, None, &mut rng)
                .unwrap();
        let source = default_vocabulary();
        for q in &questions {
            let word = source.iter().find(|w| w.id == q.id).unwrap();
            assert_eq!(q.correct_answer(), word.target);
            assert!(q.prompt.contains(&word.native));
        }
    }

    #[test]
    fn same_seed_same_quiz() {
        let words = pool(20);
        let a = generate_questions(
            &words,
            QuizKind::MultipleChoice,
            None,
            &mut StdRng::seed_from_u64(77),
        )
        .unwrap();
        let b = generate_questions(
            &words,
            QuizKind::MultipleChoice,
            None,
            &mut StdRng::seed_from_u64(77),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
