// regenchoice-core/src/ports/mod.rs

pub mod store;

pub use store::{LoadOutcome, QuestionStore, SaveOutcome, StoreInfo};
