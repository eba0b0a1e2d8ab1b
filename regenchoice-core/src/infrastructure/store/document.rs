// regenchoice-core/src/infrastructure/store/document.rs
//
// Plain question files (export / import): one pretty-printed JSON array.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::domain::question::Question;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Parses `content` and checks that it is a JSON array.
pub fn parse_question_values(content: &str, origin: &str) -> Result<Vec<Value>, InfrastructureError> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(values) => Ok(values),
        _ => Err(InfrastructureError::NotAnArray(origin.to_string())),
    }
}

/// Untyped read, so that broken entries can still be validated.
pub fn read_question_values(path: &Path) -> Result<Vec<Value>, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    parse_question_values(&content, &path.display().to_string())
}

pub fn read_questions_file(path: &Path) -> Result<Vec<Question>, InfrastructureError> {
    let values = read_question_values(path)?;
    decode_questions(values)
}

pub fn decode_questions(values: Vec<Value>) -> Result<Vec<Question>, InfrastructureError> {
    values
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(InfrastructureError::Json))
        .collect()
}

pub fn encode_questions(questions: &[Question]) -> Result<String, InfrastructureError> {
    Ok(serde_json::to_string_pretty(questions)?)
}

/// Writes the list atomically. Returns the number of bytes written.
pub fn write_questions_file(path: &Path, questions: &[Question]) -> Result<usize, InfrastructureError> {
    let content = encode_questions(questions)?;
    atomic_write(path, content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::question::{LanguageCode, QuestionType, create_question};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_preserves_questions() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("regenchoice-questions.json");
        let en = LanguageCode::parse("en")?;
        let questions: Vec<Question> = QuestionType::ALL
            .into_iter()
            .map(|t| create_question(t, en.clone()))
            .collect();

        write_questions_file(&path, &questions)?;
        assert_eq!(read_questions_file(&path)?, questions);
        Ok(())
    }

    #[test]
    fn test_non_array_file_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("single.json");
        fs::write(&path, r#"{"id": 1}"#)?;

        let err = read_question_values(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::NotAnArray(_)));
        assert!(err.to_string().ends_with("must contain an array of questions"));
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_a_json_error() {
        assert!(matches!(
            parse_question_values("[{", "inline"),
            Err(InfrastructureError::Json(_))
        ));
    }
}
