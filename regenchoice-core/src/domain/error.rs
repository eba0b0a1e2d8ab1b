// regenchoice-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Language '{0}' already exists")]
    #[diagnostic(
        code(regenchoice::domain::duplicate_language),
        help("Edit the existing translation or remove it first.")
    )]
    DuplicateLanguage(String),

    #[error("Cannot remove the only language '{0}'")]
    #[diagnostic(
        code(regenchoice::domain::last_language),
        help("A question needs at least one translation.")
    )]
    LastLanguage(String),

    #[error("Language '{0}' is not present on this question")]
    #[diagnostic(code(regenchoice::domain::unknown_language))]
    UnknownLanguage(String),

    #[error("Invalid language code '{0}'")]
    #[diagnostic(
        code(regenchoice::domain::language_code),
        help("Use 2 to 10 lowercase letters, e.g. \"sv\" for Swedish.")
    )]
    InvalidLanguageCode(String),

    #[error("Can only manage items on LEVLQ or OPTSQ questions (got {0})")]
    #[diagnostic(code(regenchoice::domain::not_itemized))]
    NotItemized(String),

    #[error("Item count must stay between {min} and {max}")]
    #[diagnostic(code(regenchoice::domain::item_limit))]
    ItemLimit { min: u32, max: u32 },

    #[error("Invalid item index {index} (question has {len} items)")]
    #[diagnostic(code(regenchoice::domain::item_index))]
    InvalidItemIndex { index: usize, len: usize },

    #[error("Question {0} not found")]
    #[diagnostic(code(regenchoice::domain::question_not_found))]
    QuestionNotFound(u32),

    #[error("Question id {0} is already used")]
    #[diagnostic(code(regenchoice::domain::duplicate_id))]
    DuplicateQuestionId(u32),

    #[error("Question ids are immutable (expected {expected}, got {found})")]
    #[diagnostic(code(regenchoice::domain::id_mismatch))]
    IdMismatch { expected: u32, found: u32 },

    #[error("Unknown field '{field}' for {question_type} questions")]
    #[diagnostic(
        code(regenchoice::domain::unknown_field),
        help("Field names use the JSON spelling, e.g. pref1, schemeUri, item.2.shortText.")
    )]
    UnknownField { field: String, question_type: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    #[diagnostic(code(regenchoice::domain::field_value))]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Question {id} is invalid: {errors:?}")]
    #[diagnostic(
        code(regenchoice::domain::invalid_question),
        help("Fix the listed errors before saving.")
    )]
    InvalidQuestion { id: u32, errors: Vec<String> },

    #[error("Question list is invalid: {0:?}")]
    #[diagnostic(
        code(regenchoice::domain::invalid_collection),
        help("Run `regenchoice validate` to see every problem.")
    )]
    InvalidCollection(Vec<String>),
}
