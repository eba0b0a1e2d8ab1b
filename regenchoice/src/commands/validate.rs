// regenchoice/src/commands/validate.rs
//
// USE CASE: pre-flight check of a question list, for humans or CI.

use std::path::{Path, PathBuf};

use regenchoice_core::application::store_label;
use regenchoice_core::domain::validation::{CollectionReport, WARNING_MARKER, validate_value_collection};
use regenchoice_core::infrastructure::store::read_question_values;
use regenchoice_core::ports::QuestionStore;

use super::Project;

pub async fn execute(
    project_dir: &Path,
    file: Option<PathBuf>,
    json: bool,
    strict: bool,
) -> anyhow::Result<()> {
    // Untyped load: entries that do not even decode still get a report
    let (values, source) = match file {
        Some(path) => (read_question_values(&path)?, path.display().to_string()),
        None => {
            let project = Project::open(project_dir)?;
            let values = project.store.load_raw().await?;
            (values, store_label(&project.store).await?)
        }
    };

    let report = validate_value_collection(&values);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&source, &report);
    }

    let failed = !report.valid() || (strict && report.warning_count() > 0);
    if failed {
        if !json && report.valid() {
            eprintln!("\n💥 --strict mode: failing due to warnings.");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(source: &str, report: &CollectionReport) {
    println!("🔍 Validating {}...", source);

    if report.questions.is_empty() {
        println!("   📭 No questions to validate.");
        return;
    }

    for entry in &report.questions {
        let status = if entry.report.valid() { "✅" } else { "❌" };
        let id = entry
            .id
            .map_or_else(|| "?".to_string(), |id| id.to_string());
        println!(
            "   {} [{}] {} {}",
            status,
            entry.question_type.as_deref().unwrap_or("?"),
            id,
            entry.title.as_deref().unwrap_or("Untitled")
        );
        for error in &entry.report.errors {
            println!("      • {}", error);
        }
        for warning in &entry.report.warnings {
            println!("      {}{}", WARNING_MARKER, warning);
        }
    }

    for error in &report.errors {
        println!("   ❌ {}", error);
    }

    println!("\n📊 {}", report.summary());
    if report.warning_count() > 0 {
        println!("   {} warning(s)", report.warning_count());
    }
}
