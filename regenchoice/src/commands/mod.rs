// regenchoice/src/commands/mod.rs

pub mod add_item;
pub mod add_lang;
pub mod delete;
pub mod export;
pub mod import;
pub mod info;
pub mod list;
pub mod new;
pub mod remove_item;
pub mod remove_lang;
pub mod set;
pub mod show;
pub mod types;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use regenchoice_core::application::{QuestionBank, apply_field, open_bank, save_bank};
use regenchoice_core::domain::project::ProjectConfig;
use regenchoice_core::domain::question::{LanguageCode, Question, QuestionId};
use regenchoice_core::domain::validation::{ValidationReport, WARNING_MARKER};
use regenchoice_core::infrastructure::config::load_project_config;
use regenchoice_core::infrastructure::store::JsonFileStore;

use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
    let project_dir = cli.project_dir;

    match cli.command {
        Commands::Types => types::execute(),
        Commands::New {
            question_type,
            lang,
            assignments,
        } => new::execute(&project_dir, question_type, lang, assignments).await,
        Commands::List { lang } => list::execute(&project_dir, lang).await,
        Commands::Show { id } => show::execute(&project_dir, id).await,
        Commands::Validate { file, json, strict } => {
            validate::execute(&project_dir, file, json, strict).await
        }
        Commands::Set {
            id,
            lang,
            assignments,
        } => set::execute(&project_dir, id, lang, assignments).await,
        Commands::AddLang {
            id,
            lang,
            copy_from,
            assignments,
        } => add_lang::execute(&project_dir, id, lang, copy_from, assignments).await,
        Commands::RemoveLang { id, lang } => remove_lang::execute(&project_dir, id, lang).await,
        Commands::AddItem { id } => add_item::execute(&project_dir, id).await,
        Commands::RemoveItem { id, position } => {
            remove_item::execute(&project_dir, id, position).await
        }
        Commands::Delete { id } => delete::execute(&project_dir, id).await,
        Commands::Info { json } => info::execute(&project_dir, json).await,
        Commands::Export { path } => export::execute(&project_dir, path).await,
        Commands::Import { path, replace } => import::execute(&project_dir, path, replace).await,
    }
}

// --- SHARED HELPERS ---

/// Config plus the store it points at.
pub struct Project {
    pub config: ProjectConfig,
    pub store: JsonFileStore,
}

impl Project {
    pub fn open(project_dir: &Path) -> Result<Self> {
        let config = load_project_config(project_dir)
            .with_context(|| format!("Loading configuration from {}", project_dir.display()))?;
        let store = JsonFileStore::new(config.store.resolve(project_dir));
        debug!(project = %config.name, file = ?store.settings().questions_file, "Project opened");
        Ok(Self { config, store })
    }

    pub fn default_language(&self) -> Result<LanguageCode> {
        Ok(LanguageCode::parse(&self.config.default_language)?)
    }
}

pub fn parse_language(raw: Option<&str>) -> Result<Option<LanguageCode>> {
    raw.map(LanguageCode::parse).transpose().map_err(Into::into)
}

/// Applies `FIELD=VALUE` pairs in order.
pub fn apply_assignments(
    question: &mut Question,
    language: Option<&LanguageCode>,
    assignments: &[String],
) -> Result<()> {
    for assignment in assignments {
        let (field, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected FIELD=VALUE, got '{}'", assignment))?;
        apply_field(question, language, field.trim(), value)?;
    }
    Ok(())
}

/// Loads the store, runs `edit` on a working copy of question `id`, then
/// commits and saves. Nothing is written when the edited question (or any
/// other stored question) has errors.
pub async fn edit_question<T, F>(project: &Project, id: u32, edit: F) -> Result<T>
where
    F: FnOnce(&mut Question) -> Result<T>,
{
    let mut bank = open_bank(&project.store).await?;
    let mut working = bank.begin_edit(QuestionId::new(id))?;
    let value = edit(&mut working)?;
    commit_and_save(project, &mut bank, working).await?;
    Ok(value)
}

pub async fn commit_and_save(
    project: &Project,
    bank: &mut QuestionBank,
    question: Question,
) -> Result<()> {
    let report = bank.commit(question)?;
    print_warnings(&report);
    save(project, bank).await
}

pub async fn save(project: &Project, bank: &mut QuestionBank) -> Result<()> {
    let outcome = save_bank(&project.store, bank).await?;
    println!(
        "💾 Saved {} question(s) ({} bytes) to {}",
        outcome.count,
        outcome.bytes,
        project.store.settings().questions_file.display()
    );
    Ok(())
}

pub fn print_warnings(report: &ValidationReport) {
    for warning in &report.warnings {
        println!("   {}{}", WARNING_MARKER, warning);
    }
}
