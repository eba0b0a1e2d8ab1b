// regenchoice/src/commands/add_item.rs

use std::path::Path;

use regenchoice_core::domain::question::add_item;

use super::{Project, edit_question};

pub async fn execute(project_dir: &Path, id: u32) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let count = edit_question(&project, id, |q| Ok(add_item(q)?)).await?;

    println!("➕ Question {} now has {} items", id, count);
    Ok(())
}
