// regenchoice/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use regenchoice_core::domain::question::QuestionType;

#[derive(Parser)]
#[command(name = "regenchoice")]
#[command(about = "Author, validate and store multi-language RegenCHOICE questions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (holds regenchoice.yaml and the data dir)
    #[arg(long, global = true, default_value = ".", env = "REGENCHOICE_PROJECT_DIR")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📖 Lists the question types
    Types,

    /// ✨ Creates a question and saves it to the store
    New {
        /// Question type code (AORBQ, FACTQ, LEVLQ, LIKSQ, OPTSQ, RANGQ, TRIPQ)
        question_type: QuestionType,

        /// Initial language (default: `default-language` from the config)
        #[arg(long, short)]
        lang: Option<String>,

        /// Field assignment applied before saving (ex: title="Soil health")
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// 📋 Lists the stored questions
    List {
        /// Language used for titles
        #[arg(long, short)]
        lang: Option<String>,
    },

    /// 🔎 Prints one question as JSON
    Show { id: u32 },

    /// ✅ Validates the store (or a question file)
    Validate {
        /// Validate this JSON file instead of the store
        #[arg(long)]
        file: Option<PathBuf>,

        /// Machine-readable report
        #[arg(long)]
        json: bool,

        /// Fail on warnings too
        #[arg(long)]
        strict: bool,
    },

    /// 📝 Sets fields of a question (JSON field names)
    Set {
        id: u32,

        /// Language of the edited texts (default: the question's default language)
        #[arg(long, short)]
        lang: Option<String>,

        /// One or more FIELD=VALUE pairs (ex: pref1=Car item.2.shortText=Often)
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// 🌍 Adds a translation to a question
    AddLang {
        id: u32,
        lang: String,

        /// Copy the content of this language instead of starting blank
        #[arg(long)]
        copy_from: Option<String>,

        /// Field assignment for the new language (ex: title="Transports")
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// 🗑️ Removes a translation from a question
    RemoveLang { id: u32, lang: String },

    /// ➕ Appends an item to a LEVLQ or OPTSQ question
    AddItem { id: u32 },

    /// ➖ Removes an item (1-based position) from a LEVLQ or OPTSQ question
    RemoveItem { id: u32, position: usize },

    /// ❌ Deletes a question
    Delete { id: u32 },

    /// 💾 Describes the store (location, size, last change)
    Info {
        #[arg(long)]
        json: bool,
    },

    /// 📤 Writes all questions to a JSON file
    Export {
        #[arg(default_value = "regenchoice-questions.json")]
        path: PathBuf,
    },

    /// 📥 Reads questions from a JSON file into the store
    Import {
        path: PathBuf,

        /// Replace the stored questions instead of appending
        #[arg(long)]
        replace: bool,
    },
}
