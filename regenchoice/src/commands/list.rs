// regenchoice/src/commands/list.rs

use comfy_table::Table;
use std::path::Path;

use regenchoice_core::application::open_bank;

use super::{Project, parse_language};

pub async fn execute(project_dir: &Path, lang: Option<String>) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let language = parse_language(lang.as_deref())?;
    let bank = open_bank(&project.store).await?;

    if bank.is_empty() {
        println!("📭 No questions yet in {}", bank.source());
        return Ok(());
    }

    let report = bank.validate();
    let mut table = Table::new();
    table.set_header(vec!["ID", "Type", "Title", "Languages", "Status"]);

    for (question, entry) in bank.questions().iter().zip(&report.questions) {
        let title = question
            .title_in(language.as_ref().unwrap_or(&question.default_language))
            .unwrap_or("Untitled");
        let languages: Vec<&str> = question
            .languages()
            .map(|l| l.as_str())
            .collect();
        let status = if !entry.report.valid() {
            format!("❌ {} error(s)", entry.report.errors.len())
        } else if entry.report.has_warnings() {
            format!("⚠️ {} warning(s)", entry.report.warnings.len())
        } else {
            "✅".to_string()
        };

        table.add_row(vec![
            question.id().to_string(),
            question.question_type().to_string(),
            title.to_string(),
            languages.join(", "),
            status,
        ]);
    }

    println!("{table}");
    println!("📊 {}", report.summary());
    Ok(())
}
