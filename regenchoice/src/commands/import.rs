// regenchoice/src/commands/import.rs

use std::path::{Path, PathBuf};

use regenchoice_core::application::{import_file, open_bank};

use super::{Project, save};

pub async fn execute(project_dir: &Path, path: PathBuf, replace: bool) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let mut bank = open_bank(&project.store).await?;

    let outcome = import_file(&mut bank, &path, replace)?;
    save(&project, &mut bank).await?;

    let verb = if outcome.replaced { "Replaced the store with" } else { "Imported" };
    println!("📥 {} {} question(s) from {}", verb, outcome.imported, path.display());
    Ok(())
}
