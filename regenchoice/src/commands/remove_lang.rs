// regenchoice/src/commands/remove_lang.rs

use std::path::Path;

use regenchoice_core::domain::question::{LanguageCode, remove_translation};

use super::{Project, edit_question};

pub async fn execute(project_dir: &Path, id: u32, lang: String) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let language = LanguageCode::parse(&lang)?;

    let removal = edit_question(&project, id, |q| Ok(remove_translation(q, &language)?)).await?;

    println!("🗑️  Removed '{}' from question {}", removal.removed, id);
    if let Some(promoted) = removal.promoted_default {
        println!("   👉 Default language is now '{}'", promoted);
    }
    Ok(())
}
