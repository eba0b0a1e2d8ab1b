// regenchoice/src/commands/set.rs

use std::path::Path;

use super::{Project, apply_assignments, edit_question, parse_language};

pub async fn execute(
    project_dir: &Path,
    id: u32,
    lang: Option<String>,
    assignments: Vec<String>,
) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let language = parse_language(lang.as_deref())?;

    edit_question(&project, id, |q| {
        apply_assignments(q, language.as_ref(), &assignments)
    })
    .await?;

    println!("📝 Updated {} field(s) of question {}", assignments.len(), id);
    Ok(())
}
