// regenchoice-core/src/domain/validation/raw.rs
//
// Validation over untyped JSON, as read from a file or the store: nothing is
// assumed about the shape, every problem becomes a report entry.

use serde_json::{Map, Value};

use crate::domain::question::{
    Details, LanguageBlock, LanguageCode, Question, QuestionType, language::is_valid_language_code,
};

use super::report::ValidationReport;
use super::rules::{check_block, check_item_count_rules, validate};

/// Validates any JSON value as a question. Never fails.
///
/// Shape problems are reported first. When the value decodes into a
/// [`Question`] the full typed rules run; otherwise the item count and
/// translation checks still run on whatever parts are well formed.
pub fn validate_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(obj) = value.as_object() else {
        report.error("question must be a JSON object");
        return report;
    };

    match obj.get("id") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => report.error("id is required"),
        Some(Value::String(s)) if s.is_empty() => report.error("id is required"),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => report.error("id is required"),
        Some(Value::Number(n)) if n.as_u64().is_some_and(|v| v <= u64::from(u32::MAX)) => {}
        Some(other) => report.error(format!("id must be a positive integer (got {})", other)),
    }

    let question_type = match obj.get("type") {
        None | Some(Value::Null) => {
            report.error("type is required");
            None
        }
        Some(other) => match serde_json::from_value::<QuestionType>(other.clone()) {
            Ok(question_type) => Some(question_type),
            Err(_) => {
                report.error(format!("type {} is not a known question type", other));
                None
            }
        },
    };

    if !matches!(obj.get("relational"), Some(Value::Bool(_))) {
        report.error("relational must be boolean");
    }

    let item_count = match obj.get("itemCount") {
        None | Some(Value::Null) => Some(0),
        Some(count) => match count.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) => Some(v),
            None => {
                report.error(format!("itemCount must be a non-negative integer (got {})", count));
                None
            }
        },
    };

    let translations = match obj.get("translations") {
        Some(Value::Object(map)) => {
            if map.is_empty() {
                report.error("translations must have at least one language");
            }
            for (language, block) in map {
                if !is_valid_language_code(language) {
                    report.error(format!(
                        "translations key '{}' is not a valid language code",
                        language
                    ));
                }
                match block {
                    Value::Object(fields) => {
                        if let Some(title) = fields.get("title")
                            && !title.is_string()
                        {
                            report.error(format!("[{}] title must be a string", language));
                        }
                    }
                    _ => report.error(format!("[{}] translation must be an object", language)),
                }
            }
            Some(map)
        }
        _ => {
            report.error("translations must be a mapping of language code to content");
            None
        }
    };

    match obj.get("defaultLanguage") {
        Some(Value::String(code)) if !is_valid_language_code(code) => report.error(format!(
            "defaultLanguage '{}' is not a valid language code",
            code
        )),
        Some(Value::String(code)) => {
            if let Some(map) = translations
                && !map.is_empty()
                && !map.contains_key(code)
            {
                report.error(format!("defaultLanguage '{}' has no translation", code));
            }
        }
        _ => report.error("defaultLanguage is required"),
    }

    if !report.valid() {
        if let (Some(question_type), Some(item_count)) = (question_type, item_count) {
            check_item_count_rules(question_type, item_count, &mut report);
            if let Some(map) = translations {
                check_raw_blocks(question_type, item_count, map, &mut report);
            }
        }
        return report;
    }

    match serde_json::from_value::<Question>(value.clone()) {
        Ok(question) => validate(&question),
        Err(e) => {
            report.error(format!("malformed question: {}", e));
            report
        }
    }
}

/// Runs the translation checks on each block whose shape is sound. Blocks
/// with a shape error already reported are skipped.
fn check_raw_blocks(
    question_type: QuestionType,
    item_count: u32,
    translations: &Map<String, Value>,
    report: &mut ValidationReport,
) {
    for (key, block) in translations {
        if !is_valid_language_code(key) {
            continue;
        }
        let (Ok(language), Value::Object(fields)) = (LanguageCode::parse(key), block) else {
            continue;
        };
        let title = match fields.get("title") {
            None => String::new(),
            Some(Value::String(title)) => title.clone(),
            Some(_) => continue,
        };
        let raw_details = fields.get("details").cloned().unwrap_or(Value::Null);
        let details = match Details::from_value(question_type, raw_details) {
            Ok(details) => details,
            Err(e) => {
                report.error(format!("[{}] malformed details: {}", language, e));
                continue;
            }
        };
        let block = LanguageBlock {
            title,
            description: fields
                .get("description")
                .and_then(Value::as_str)
                .map(String::from),
            details,
        };
        check_block(question_type, item_count, &language, &block, report);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::question::{LanguageCode, create_question};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 12,
            "type": "RANGQ",
            "relational": false,
            "itemCount": 0,
            "defaultLanguage": "en",
            "translations": {
                "en": {
                    "title": "How old are you?",
                    "details": { "unit": "years", "min": 0, "max": 120, "granularity": 1 }
                }
            }
        })
    }

    #[test]
    fn test_valid_value() {
        let report = validate_value(&sample());
        assert!(report.valid(), "{:?}", report.errors);
    }

    #[test]
    fn test_non_object_input() {
        assert_eq!(
            validate_value(&json!([1, 2])).errors,
            vec!["question must be a JSON object"]
        );
        assert!(!validate_value(&Value::Null).valid());
    }

    #[test]
    fn test_shape_errors_are_all_reported() {
        let report = validate_value(&json!({
            "id": 0,
            "type": "QUIZQ",
            "relational": "no",
            "translations": ["en"],
        }));
        assert_eq!(
            report.errors,
            vec![
                "id is required",
                "type \"QUIZQ\" is not a known question type",
                "relational must be boolean",
                "translations must be a mapping of language code to content",
                "defaultLanguage is required",
            ]
        );
    }

    #[test]
    fn test_translation_shape_errors() {
        let mut value = sample();
        value["translations"] = json!({ "EN": { "title": 5 }, "fr": "bonjour" });
        value["defaultLanguage"] = json!("de");
        let report = validate_value(&value);
        assert_eq!(
            report.errors,
            vec![
                "translations key 'EN' is not a valid language code",
                "[EN] title must be a string",
                "[fr] translation must be an object",
                "defaultLanguage 'de' has no translation",
            ]
        );
    }

    #[test]
    fn test_block_checks_run_despite_shape_errors() {
        let report = validate_value(&json!({
            "id": 12,
            "type": "RANGQ",
            "relational": "no",
            "defaultLanguage": "en",
            "translations": {
                "en": { "title": "", "details": { "unit": "", "min": 10, "max": 5 } }
            }
        }));
        assert_eq!(
            report.errors,
            vec![
                "relational must be boolean",
                "[en] title is empty",
                "[en] unit is required",
                "[en] min (10) must be less than max (5)",
            ]
        );
    }

    #[test]
    fn test_item_count_rules_run_despite_shape_errors() {
        let report = validate_value(&json!({
            "id": 0,
            "type": "TRIPQ",
            "relational": false,
            "itemCount": 4,
            "defaultLanguage": "en",
            "translations": {
                "en": { "title": "Transport", "details": { "pref1": "Car", "pref2": "Bike" } },
                "fr": { "title": "Transports", "details": { "pref1": 3 } }
            }
        }));
        assert_eq!(report.errors[0], "id is required");
        assert_eq!(report.errors[1], "TRIPQ itemCount (4) must be odd (e.g., 5 or 7)");
        assert_eq!(report.errors[2], "[en] midpointShort is required");
        assert!(report.errors[3].starts_with("[fr] malformed details:"));
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_negative_and_fractional_ids() {
        let mut value = sample();
        value["id"] = json!(-4);
        assert_eq!(
            validate_value(&value).errors,
            vec!["id must be a positive integer (got -4)"]
        );
        value["id"] = json!(1.5);
        assert!(!validate_value(&value).valid());
    }

    #[test]
    fn test_typed_rules_run_after_decode() {
        let mut value = sample();
        value["translations"]["en"]["details"]["min"] = json!(200);
        let report = validate_value(&value);
        assert_eq!(
            report.errors,
            vec!["[en] min (200) must be less than max (120)"]
        );
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let mut value = sample();
        value["translations"]["en"]["details"]["max"] = json!("lots");
        let report = validate_value(&value);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("malformed question:"));
    }

    #[test]
    fn test_round_trip_stays_valid() -> anyhow::Result<()> {
        for t in QuestionType::ALL {
            let q = create_question(t, LanguageCode::parse("en")?);
            let value = serde_json::to_value(&q)?;
            assert!(validate_value(&value).valid(), "{} failed after serialization", t);

            let parsed: Question = serde_json::from_str(&serde_json::to_string(&q)?)?;
            assert_eq!(parsed, q);
            assert!(validate(&parsed).valid());
        }
        Ok(())
    }
}
