//! Line-oriented terminal front end.
//!
//! Screens: home, personal vocabulary, quiz, and score summary. Generic over
//! the input and output streams so scripted sessions can drive it.

use crate::commands::{self, CommandError};
use crate::state::AppState;
use crate::vocabulary::{NewVocabulary, VocabularySource};
use quiz_core::{Level, QuizKind, QuizQuestion};
use std::io::{BufRead, Write};

/// Typed at the quiz prompt to leave the quiz.
const EXIT_QUIZ: &str = ":q";

pub struct Shell<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
}

/// Where the quiz screen hands control back to.
enum AfterQuiz {
    Home,
    Quit,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Vocabulary Quiz")?;
            writeln!(self.output, "  1) Multiple-choice quiz")?;
            writeln!(self.output, "  2) Typing quiz")?;
            writeln!(self.output, "  3) My vocabulary")?;
            writeln!(self.output, "  q) Quit")?;

            let Some(choice) = self.prompt("> ")? else {
                return Ok(());
            };
            let next = match choice.as_str() {
                "1" => {
                    self.quiz(QuizKind::MultipleChoice, VocabularySource::Default)
                        .await?
                }
                "2" => self.quiz(QuizKind::Typing, VocabularySource::Default).await?,
                "3" => self.vocabulary().await?,
                "q" => AfterQuiz::Quit,
                _ => {
                    writeln!(self.output, "Unknown choice: {}", choice)?;
                    AfterQuiz::Home
                }
            };
            if let AfterQuiz::Quit = next {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            }
        }
    }

    async fn vocabulary(&mut self) -> anyhow::Result<AfterQuiz> {
        loop {
            let entries = commands::list_vocabulary(self.state).await?;
            writeln!(self.output)?;
            writeln!(self.output, "My vocabulary ({} words)", entries.len())?;
            if entries.is_empty() {
                writeln!(self.output, "  No words yet. Add one to start your own list.")?;
            }
            for entry in &entries {
                let pronunciation = entry
                    .pronunciation
                    .as_deref()
                    .map(|p| format!(" {}", p))
                    .unwrap_or_default();
                writeln!(
                    self.output,
                    "  [{}] {} - {}{} ({}, {})",
                    entry.id,
                    entry.native,
                    entry.target,
                    pronunciation,
                    entry.level.as_str(),
                    entry.category
                )?;
            }
            writeln!(
                self.output,
                "  a) Add  d) Delete  m) Multiple-choice quiz  t) Typing quiz  b) Back"
            )?;

            let Some(choice) = self.prompt("> ")? else {
                return Ok(AfterQuiz::Quit);
            };
            match choice.as_str() {
                "a" => {
                    if !self.add_word().await? {
                        return Ok(AfterQuiz::Quit);
                    }
                }
                "d" => {
                    if !self.delete_word().await? {
                        return Ok(AfterQuiz::Quit);
                    }
                }
                "m" | "t" => {
                    if entries.is_empty() {
                        writeln!(self.output, "You have no words yet. Add some first!")?;
                        continue;
                    }
                    let kind = if choice == "m" {
                        QuizKind::MultipleChoice
                    } else {
                        QuizKind::Typing
                    };
                    return self.quiz(kind, VocabularySource::Personal).await;
                }
                "b" => return Ok(AfterQuiz::Home),
                _ => writeln!(self.output, "Unknown choice: {}", choice)?,
            }
        }
    }

    /// Returns false when input ended mid-form.
    async fn add_word(&mut self) -> anyhow::Result<bool> {
        let Some(native) = self.prompt("Native term: ")? else {
            return Ok(false);
        };
        let Some(target) = self.prompt("Target term: ")? else {
            return Ok(false);
        };
        let Some(pronunciation) = self.prompt("Pronunciation (optional): ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Category (optional): ")? else {
            return Ok(false);
        };
        let Some(level) = self.prompt("Level [basic/intermediate/advanced]: ")? else {
            return Ok(false);
        };

        let level = if level.is_empty() {
            None
        } else {
            match Level::from_str(&level.to_lowercase()) {
                Some(level) => Some(level),
                None => {
                    writeln!(self.output, "Unknown level {:?}, using basic", level)?;
                    None
                }
            }
        };

        let input = NewVocabulary {
            native,
            target,
            pronunciation: Some(pronunciation),
            level,
            category: Some(category),
        };
        match commands::add_vocabulary(input, self.state).await {
            Ok(entry) => writeln!(self.output, "Added \"{}\"", entry.native)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    /// Returns false when input ended mid-form.
    async fn delete_word(&mut self) -> anyhow::Result<bool> {
        let Some(id) = self.prompt("Id to delete: ")? else {
            return Ok(false);
        };
        let Some(confirm) = self.prompt("Delete this word? [y/N] ")? else {
            return Ok(false);
        };
        if !confirm.eq_ignore_ascii_case("y") {
            return Ok(true);
        }
        match commands::delete_vocabulary(id, self.state).await {
            Ok(()) => writeln!(self.output, "Deleted")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    async fn quiz(&mut self, kind: QuizKind, source: VocabularySource) -> anyhow::Result<AfterQuiz> {
        if let Err(e) = commands::start_quiz(kind, source, self.state).await {
            self.report(&e)?;
            return Ok(AfterQuiz::Home);
        }

        loop {
            let status = commands::quiz_status(self.state).await?;
            if status.completed {
                match self.score_screen().await? {
                    Some(true) => {
                        commands::restart_quiz(self.state).await?;
                        continue;
                    }
                    Some(false) => return Ok(AfterQuiz::Home),
                    None => return Ok(AfterQuiz::Quit),
                }
            }

            let Some(question) = commands::current_question(self.state).await? else {
                return Ok(AfterQuiz::Home);
            };
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Question {}/{}  (score {})",
                status.current_index + 1,
                status.total,
                status.score
            )?;
            writeln!(self.output, "{}", question.prompt)?;
            for (i, option) in question.options().iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, option)?;
            }

            let Some(raw) = self.prompt("Answer: ")? else {
                return Ok(AfterQuiz::Quit);
            };
            if raw == EXIT_QUIZ {
                writeln!(self.output, "Quiz abandoned, results are not saved.")?;
                return Ok(AfterQuiz::Home);
            }
            if raw.is_empty() {
                writeln!(self.output, "Please enter an answer.")?;
                continue;
            }

            let answer = resolve_answer(&question, &raw);
            match commands::submit_answer(answer, self.state).await {
                Ok(response) if response.correct => writeln!(self.output, "Correct!")?,
                Ok(response) => writeln!(
                    self.output,
                    "Wrong. The answer is \"{}\"",
                    response.correct_answer
                )?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Some(true) to restart, Some(false) to go home, None when input ended.
    async fn score_screen(&mut self) -> anyhow::Result<Option<bool>> {
        let result = commands::get_quiz_result(self.state).await?;
        writeln!(self.output)?;
        writeln!(self.output, "Score: {}/{}", result.score, result.total)?;
        if !result.wrong_answers.is_empty() {
            writeln!(self.output, "Review:")?;
            for wrong in &result.wrong_answers {
                writeln!(
                    self.output,
                    "  {}  you: \"{}\"  correct: \"{}\"",
                    wrong.question, wrong.user_answer, wrong.correct_answer
                )?;
            }
        }

        loop {
            let Some(choice) = self.prompt("r) Restart  h) Home > ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "r" => return Ok(Some(true)),
                "h" => return Ok(Some(false)),
                _ => writeln!(self.output, "Unknown choice: {}", choice)?,
            }
        }
    }

    fn report(&mut self, error: &CommandError) -> anyhow::Result<()> {
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line. None at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Map an option number to its text for multiple-choice questions.
fn resolve_answer(question: &QuizQuestion, raw: &str) -> String {
    let options = question.options();
    match raw.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
        _ => raw.to_string(),
    }
}
