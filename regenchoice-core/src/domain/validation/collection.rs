// regenchoice-core/src/domain/validation/collection.rs

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::question::Question;

use super::raw::validate_value;
use super::report::ValidationReport;
use super::rules::validate;

/// Report for one entry of a question list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    /// Position in the list (0-based).
    pub index: usize,
    pub id: Option<u32>,
    pub question_type: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionReport {
    pub questions: Vec<QuestionReport>,
    /// Problems spanning several questions (duplicate ids).
    pub errors: Vec<String>,
}

impl CollectionReport {
    pub fn valid_count(&self) -> usize {
        self.questions.iter().filter(|q| q.report.valid()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.questions.iter().map(|q| q.report.warnings.len()).sum()
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty() && self.questions.iter().all(|q| q.report.valid())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} questions are valid",
            self.valid_count(),
            self.questions.len()
        )
    }
}

pub fn validate_collection(questions: &[Question]) -> CollectionReport {
    let entries = questions
        .iter()
        .enumerate()
        .map(|(index, q)| QuestionReport {
            index,
            id: Some(q.id().get()),
            question_type: Some(q.question_type().to_string()),
            title: q.title_in(&q.default_language).map(str::to_string),
            report: validate(q),
        })
        .collect();
    with_duplicate_check(entries)
}

/// Same as [`validate_collection`] over untyped JSON entries.
pub fn validate_value_collection(values: &[Value]) -> CollectionReport {
    let entries = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let default_language = value.get("defaultLanguage").and_then(Value::as_str);
            let title = default_language
                .and_then(|lang| value.get("translations")?.get(lang)?.get("title"))
                .and_then(Value::as_str)
                .map(str::to_string);
            QuestionReport {
                index,
                id: value
                    .get("id")
                    .and_then(Value::as_u64)
                    .and_then(|v| u32::try_from(v).ok()),
                question_type: value.get("type").and_then(Value::as_str).map(str::to_string),
                title,
                report: validate_value(value),
            }
        })
        .collect();
    with_duplicate_check(entries)
}

fn with_duplicate_check(questions: Vec<QuestionReport>) -> CollectionReport {
    let mut positions: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for q in &questions {
        if let Some(id) = q.id.filter(|id| *id != 0) {
            positions.entry(id).or_default().push(q.index + 1);
        }
    }

    let errors = positions
        .into_iter()
        .filter(|(_, at)| at.len() > 1)
        .map(|(id, at)| {
            let at: Vec<String> = at.iter().map(ToString::to_string).collect();
            format!(
                "id {} is used by {} questions (positions {})",
                id,
                at.len(),
                at.join(", ")
            )
        })
        .collect();

    CollectionReport { questions, errors }
}
