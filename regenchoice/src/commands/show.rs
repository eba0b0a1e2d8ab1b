// regenchoice/src/commands/show.rs

use std::path::Path;

use regenchoice_core::application::open_bank;
use regenchoice_core::domain::question::QuestionId;

use super::Project;

pub async fn execute(project_dir: &Path, id: u32) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let bank = open_bank(&project.store).await?;
    let question = bank.find(QuestionId::new(id))?;

    println!("{}", serde_json::to_string_pretty(question)?);
    Ok(())
}
