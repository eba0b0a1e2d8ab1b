// regenchoice/src/commands/export.rs

use std::path::{Path, PathBuf};

use regenchoice_core::application::{export_file, open_bank};

use super::Project;

pub async fn execute(project_dir: &Path, path: PathBuf) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let bank = open_bank(&project.store).await?;

    let bytes = export_file(&bank, &path)?;
    println!(
        "📤 Exported {} question(s) to {} ({} bytes)",
        bank.len(),
        path.display(),
        bytes
    );
    Ok(())
}
