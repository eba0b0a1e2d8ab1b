// regenchoice/src/commands/new.rs
//
// USE CASE: create a question, fill in fields, validate, save.

use std::path::Path;

use regenchoice_core::application::open_bank;
use regenchoice_core::domain::question::QuestionType;

use super::{Project, apply_assignments, commit_and_save, parse_language};

pub async fn execute(
    project_dir: &Path,
    question_type: QuestionType,
    lang: Option<String>,
    assignments: Vec<String>,
) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let language = match parse_language(lang.as_deref())? {
        Some(language) => language,
        None => project.default_language()?,
    };

    let mut bank = open_bank(&project.store).await?;
    let mut question = bank.create_question(question_type, language.clone());
    apply_assignments(&mut question, None, &assignments)?;

    let id = question.id();
    commit_and_save(&project, &mut bank, question).await?;
    println!("✨ Created {} question {} ({})", question_type, id, language);
    Ok(())
}
