// regenchoice-core/src/application/bank.rs

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::question::{
    LanguageCode, Question, QuestionId, QuestionType, create_question_with_id,
};
use crate::domain::validation::{CollectionReport, ValidationReport, validate, validate_collection};

/// The question list of one editing session.
///
/// Tracks which question is being edited (`None` means a new one is being
/// created), whether there are unsaved changes, and where the list came from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    editing: Option<usize>,
    dirty: bool,
    source: String,
}

impl QuestionBank {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// A bank holding freshly loaded questions, with nothing left to save.
    pub fn from_questions(questions: Vec<Question>, source: impl Into<String>) -> Self {
        Self {
            questions,
            editing: None,
            dirty: false,
            source: source.into(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    pub fn find(&self, id: QuestionId) -> Result<&Question, DomainError> {
        self.questions
            .iter()
            .find(|q| q.id() == id)
            .ok_or(DomainError::QuestionNotFound(id.get()))
    }

    /// Direct mutable access. Marks the bank dirty.
    pub fn find_mut(&mut self, id: QuestionId) -> Result<&mut Question, DomainError> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or(DomainError::QuestionNotFound(id.get()))?;
        self.dirty = true;
        Ok(question)
    }

    // --- CREATION ---

    /// A fresh question whose id is not used by any question in the bank.
    /// The question is not added; pass it to [`QuestionBank::commit`].
    pub fn create_question(&self, question_type: QuestionType, language: LanguageCode) -> Question {
        let id = loop {
            let candidate = QuestionId::random();
            if self.position(candidate).is_none() {
                break candidate;
            }
            debug!(id = candidate.get(), "Drawn id already used, drawing again");
        };
        create_question_with_id(id, question_type, language)
    }

    /// Appends without validating. Ids stay unique.
    pub fn add(&mut self, question: Question) -> Result<(), DomainError> {
        if self.position(question.id()).is_some() {
            return Err(DomainError::DuplicateQuestionId(question.id().get()));
        }
        self.questions.push(question);
        self.dirty = true;
        Ok(())
    }

    /// Replaces the question with the same id, without validating.
    pub fn update(&mut self, question: Question) -> Result<(), DomainError> {
        let index = self
            .position(question.id())
            .ok_or(DomainError::QuestionNotFound(question.id().get()))?;
        self.questions[index] = question;
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, id: QuestionId) -> Result<Question, DomainError> {
        let index = self
            .position(id)
            .ok_or(DomainError::QuestionNotFound(id.get()))?;

        self.editing = match self.editing {
            Some(e) if e == index => None,
            Some(e) if e > index => Some(e - 1),
            other => other,
        };
        self.dirty = true;
        Ok(self.questions.remove(index))
    }

    /// Swaps in a whole new list (import with replace).
    pub fn replace_all(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.editing = None;
        self.dirty = true;
    }

    // --- EDITING SESSION ---

    /// Starts editing question `id`; returns a working copy.
    pub fn begin_edit(&mut self, id: QuestionId) -> Result<Question, DomainError> {
        let index = self
            .position(id)
            .ok_or(DomainError::QuestionNotFound(id.get()))?;
        self.editing = Some(index);
        Ok(self.questions[index].clone())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    /// Validates `question` and stores it: over the question being edited,
    /// or appended when none is. Invalid questions are refused and the bank
    /// is left untouched. The report (warnings included) is returned.
    pub fn commit(&mut self, question: Question) -> Result<ValidationReport, DomainError> {
        let report = validate(&question);
        if !report.valid() {
            return Err(DomainError::InvalidQuestion {
                id: question.id().get(),
                errors: report.errors,
            });
        }

        match self.editing {
            Some(index) => {
                let expected = self.questions[index].id();
                if expected != question.id() {
                    return Err(DomainError::IdMismatch {
                        expected: expected.get(),
                        found: question.id().get(),
                    });
                }
                self.questions[index] = question;
            }
            None => {
                if self.position(question.id()).is_some() {
                    return Err(DomainError::DuplicateQuestionId(question.id().get()));
                }
                self.questions.push(question);
            }
        }

        self.editing = None;
        self.dirty = true;
        Ok(report)
    }

    // --- PERSISTENCE STATE ---

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self, source: impl Into<String>) {
        self.dirty = false;
        self.source = source.into();
    }

    pub fn validate(&self) -> CollectionReport {
        validate_collection(&self.questions)
    }
}
