// regenchoice-core/src/infrastructure/store/mod.rs

pub mod document;
pub mod json_file;

pub use document::{read_question_values, read_questions_file, write_questions_file};
pub use json_file::JsonFileStore;
