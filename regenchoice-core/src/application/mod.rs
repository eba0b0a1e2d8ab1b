// regenchoice-core/src/application/mod.rs

pub mod bank;
pub mod binding;
pub mod workspace;

// --- RE-EXPORTS (FACADE) ---
// Lets the CLI write `use regenchoice_core::application::{open_bank, save_bank};`

pub use bank::QuestionBank;
pub use binding::apply_field;
pub use workspace::{
    ImportOutcome, export_file, flatten_errors, import_file, open_bank, save_bank, store_label,
};
