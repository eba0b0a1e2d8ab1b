// regenchoice/src/commands/add_lang.rs

use std::path::Path;

use regenchoice_core::domain::question::{LanguageCode, add_translation};

use super::{Project, apply_assignments, edit_question, parse_language};

pub async fn execute(
    project_dir: &Path,
    id: u32,
    lang: String,
    copy_from: Option<String>,
    assignments: Vec<String>,
) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let language = LanguageCode::parse(&lang)?;
    let copy_from = parse_language(copy_from.as_deref())?;

    let copied = edit_question(&project, id, |q| {
        let copied = add_translation(q, language.clone(), copy_from.as_ref())?;
        apply_assignments(q, Some(&language), &assignments)?;
        Ok(copied)
    })
    .await?;

    let name = language.display_name().unwrap_or("custom language");
    match (copied, &copy_from) {
        (true, Some(source)) => {
            println!("🌍 Added '{}' ({}) to question {}, copied from '{}'", language, name, id, source)
        }
        _ => println!("🌍 Added '{}' ({}) to question {}", language, name, id),
    }
    Ok(())
}
