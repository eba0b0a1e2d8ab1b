// regenchoice/src/commands/info.rs

use std::path::Path;

use regenchoice_core::ports::QuestionStore;

use super::Project;

pub async fn execute(project_dir: &Path, json: bool) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let info = project.store.info().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("💾 Project: {}", project.config.name);
    println!("   Data dir:       {}", info.data_dir.display());
    println!("   Questions file: {}", info.questions_file.display());
    println!(
        "   Exists:         {}",
        if info.file_exists { "yes" } else { "no" }
    );
    println!(
        "   Writable:       {}",
        if info.writable { "yes" } else { "no" }
    );
    if let Some(size) = info.file_size {
        println!("   Size:           {} bytes", size);
    }
    if let Some(modified) = info.last_modified {
        println!("   Last modified:  {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!(
        "   Backups:        {} (keeping {})",
        project.store.backups().len(),
        project.store.settings().backup_keep
    );
    Ok(())
}
