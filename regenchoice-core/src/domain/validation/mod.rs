// regenchoice-core/src/domain/validation/mod.rs

pub mod collection;
pub mod raw;
pub mod report;
pub mod rules;

// Re-exports
pub use collection::{
    CollectionReport, QuestionReport, validate_collection, validate_value_collection,
};
pub use raw::validate_value;
pub use report::{ValidationReport, WARNING_MARKER};
pub use rules::{TITLE_MAX_CHARS, validate};
