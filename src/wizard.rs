//! Question sequencing.
//!
//! A [`Wizard`] owns an ordered list of [`Question`]s and a cursor. The
//! commit key stores the focused field's value as the question's answer,
//! clears the field, and hands focus to the next question. Committing
//! the last question finishes the wizard; after that every key is a no-op.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::input::{FieldEffect, InputField, MultiLineField, SingleLineField};
use crate::key::Key;

/// Heading of the finished summary.
pub const DONE_LABEL: &str = "Done!";

/// Hint shown next to [`DONE_LABEL`].
pub const EXIT_HINT: &str = "Press Ctrl+C to exit.";

// ============================================================================
// QUESTION
// ============================================================================

/// A prompt, the field that captures its answer, and the answer once given.
#[derive(Debug)]
pub struct Question {
    prompt: String,
    field: Box<dyn InputField>,
    answer: Option<String>,
    committed: bool,
}

impl Question {
    pub fn new(prompt: impl Into<String>, field: Box<dyn InputField>) -> Self {
        Self {
            prompt: prompt.into(),
            field,
            answer: None,
            committed: false,
        }
    }

    /// Question answered through a [`SingleLineField`].
    pub fn short(prompt: impl Into<String>) -> Self {
        Self::new(prompt, Box::new(SingleLineField::new()))
    }

    /// Question answered through a [`MultiLineField`].
    pub fn long(prompt: impl Into<String>) -> Self {
        Self::new(prompt, Box::new(MultiLineField::new()))
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn field(&self) -> &dyn InputField {
        self.field.as_ref()
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Store the field's value as the answer. Only the first call counts.
    fn commit(&mut self) -> bool {
        if self.committed {
            return false;
        }
        self.answer = Some(self.field.value().to_string());
        self.committed = true;
        self.field.clear();
        self.field.blur();
        true
    }
}

// ============================================================================
// WIZARD
// ============================================================================

/// What a key did to the wizard, when it did something notable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Question `index` was answered; the cursor moved on.
    Committed { index: usize },
    /// The last question was answered.
    Finished,
}

#[derive(Debug)]
pub struct Wizard {
    questions: Vec<Question>,
    cursor: usize,
    finished: bool,
}

impl Wizard {
    /// Build a wizard and focus the first question's field.
    ///
    /// An empty question list is finished from the start.
    pub fn new(mut questions: Vec<Question>) -> Self {
        let finished = questions.is_empty();
        if let Some(first) = questions.first_mut() {
            first.field.set_focus(true);
        }
        Self {
            questions,
            cursor: 0,
            finished,
        }
    }

    /// The questionnaire the application ships with.
    pub fn default_questions() -> Vec<Question> {
        vec![
            Question::short("What is your name?"),
            Question::long("What is your quest?"),
            Question::long("What is your favorite color?"),
        ]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_question(&self) -> Result<&Question> {
        self.questions
            .get(self.cursor)
            .ok_or_else(|| Error::out_of_range("question", self.cursor, self.questions.len()))
    }

    fn current_question_mut(&mut self) -> Result<&mut Question> {
        let len = self.questions.len();
        let cursor = self.cursor;
        self.questions
            .get_mut(cursor)
            .ok_or_else(|| Error::out_of_range("question", cursor, len))
    }

    /// Route one key: commit on Enter or a field submit, else edit the field.
    pub fn handle_key(&mut self, key: &Key) -> Result<Option<WizardEvent>> {
        if self.finished {
            return Ok(None);
        }

        let question = self.current_question_mut()?;
        let submit = match key {
            Key::Enter => true,
            other => question.field.capture(other) == Some(FieldEffect::Submit),
        };

        if submit { self.commit() } else { Ok(None) }
    }

    fn commit(&mut self) -> Result<Option<WizardEvent>> {
        let index = self.cursor;
        let question = self.current_question_mut()?;
        if !question.commit() {
            return Ok(None);
        }
        debug!(index, answer = question.answer().unwrap_or_default(), "answer committed");

        if index + 1 == self.questions.len() {
            self.finished = true;
            info!(questions = self.questions.len(), "wizard finished");
            return Ok(Some(WizardEvent::Finished));
        }

        self.cursor += 1;
        self.current_question_mut()?.field.set_focus(true);
        Ok(Some(WizardEvent::Committed { index }))
    }

    /// `prompt: answer` per question, in order, one per line.
    pub fn summary(&self) -> String {
        self.questions
            .iter()
            .map(|q| format!("{}: {}\n", q.prompt, q.answer().unwrap_or_default()))
            .collect()
    }

    /// Prompts paired with their answers, for reporting.
    pub fn answers(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.questions.iter().map(|q| (q.prompt(), q.answer()))
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Self::default_questions())
    }
}

// ============================================================================
// TESTS
// ============================================================================
