// regenchoice/src/commands/delete.rs

use std::path::Path;

use regenchoice_core::application::open_bank;
use regenchoice_core::domain::question::QuestionId;

use super::{Project, save};

pub async fn execute(project_dir: &Path, id: u32) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let mut bank = open_bank(&project.store).await?;

    let removed = bank.remove(QuestionId::new(id))?;
    save(&project, &mut bank).await?;

    println!(
        "🗑️  Deleted {} question {} ({} left)",
        removed.question_type(),
        id,
        bank.len()
    );
    Ok(())
}
