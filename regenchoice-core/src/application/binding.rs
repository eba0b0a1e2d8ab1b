// regenchoice-core/src/application/binding.rs
//
// Field-by-field editing, the way a form writes its inputs back into a
// question. Field names use the JSON spelling; item fields are addressed as
// `item.<n>.<field>` with `n` starting at 1. Values are trimmed.

use crate::domain::error::DomainError;
use crate::domain::question::{Details, LanguageCode, Question, QuestionId, set_item_count};

/// Sets `field` to `value`.
///
/// Language-dependent fields go to `language` (the default language when
/// `None`). Language-independent detail settings (RANGQ bounds, LEVLQ scheme
/// and item values, OPTSQ flags) are written to every translation.
pub fn apply_field(
    question: &mut Question,
    language: Option<&LanguageCode>,
    field: &str,
    value: &str,
) -> Result<(), DomainError> {
    let value = value.trim();

    // --- QUESTION-LEVEL FIELDS ---
    match field {
        "relational" => {
            question.relational = parse_bool(field, value)?;
            return Ok(());
        }
        "itemCount" => {
            let count = parse_number::<u32>(field, value)?;
            set_item_count(question, count)?;
            return Ok(());
        }
        "learnMoreText" => {
            question.learn_more_text = non_empty(value);
            return Ok(());
        }
        "enablingQuestionId" => {
            question.enabling_question_id = match value {
                "" => None,
                _ => {
                    let raw = parse_number::<u32>(field, value)?;
                    if raw == 0 {
                        return Err(invalid(field, value, "must be a positive integer"));
                    }
                    Some(QuestionId::new(raw))
                }
            };
            return Ok(());
        }
        "enablingAnswers" => {
            question.enabling_answers = non_empty(value);
            return Ok(());
        }
        "defaultLanguage" => {
            let code = LanguageCode::parse(value)?;
            if !question.has_language(&code) {
                return Err(DomainError::UnknownLanguage(code.to_string()));
            }
            question.default_language = code;
            return Ok(());
        }
        _ => {}
    }

    if is_shared_setting(field) {
        return apply_shared(question, field, value);
    }

    // --- LANGUAGE-DEPENDENT FIELDS ---
    let language = language.unwrap_or(&question.default_language).clone();
    let question_type = question.question_type().to_string();
    let block = question
        .translations
        .get_mut(&language)
        .ok_or_else(|| DomainError::UnknownLanguage(language.to_string()))?;

    match field {
        "title" => {
            block.title = value.to_string();
            return Ok(());
        }
        "description" => {
            block.description = non_empty(value);
            return Ok(());
        }
        _ => {}
    }

    let unknown = || DomainError::UnknownField {
        field: field.to_string(),
        question_type: question_type.clone(),
    };

    if let Some((index, item_field)) = parse_item_field(field) {
        let len = block.details.item_len().unwrap_or(0);
        let text = match (&mut block.details, item_field) {
            (Details::Levels(d), "shortText") => d.items.get_mut(index).map(|i| &mut i.short_text),
            (Details::Levels(d), "longText") => d.items.get_mut(index).map(|i| &mut i.long_text),
            (Details::Options(d), "shortText") => d.items.get_mut(index).map(|i| &mut i.short_text),
            (Details::Options(d), "longText") => d.items.get_mut(index).map(|i| &mut i.long_text),
            _ => return Err(unknown()),
        };
        let Some(text) = text else {
            return Err(DomainError::InvalidItemIndex { index: index + 1, len });
        };
        *text = value.to_string();
        return Ok(());
    }

    let text = match (&mut block.details, field) {
        (Details::AOrB(d), "pref1") => &mut d.pref1,
        (Details::AOrB(d), "pref2") => &mut d.pref2,
        (Details::AOrB(d), "prefer1Desc") => &mut d.prefer1_desc,
        (Details::AOrB(d), "prefer2Desc") => &mut d.prefer2_desc,
        (Details::Triple(d), "pref1") => &mut d.pref1,
        (Details::Triple(d), "pref2") => &mut d.pref2,
        (Details::Triple(d), "midpointShort") => &mut d.midpoint_short,
        (Details::Triple(d), "prefer1Desc") => &mut d.prefer1_desc,
        (Details::Triple(d), "prefer2Desc") => &mut d.prefer2_desc,
        (Details::Triple(d), "midpointDesc") => &mut d.midpoint_desc,
        (Details::Likert(d), "positionStatement") => {
            d.position_statement = non_empty(value);
            return Ok(());
        }
        _ => return Err(unknown()),
    };
    *text = value.to_string();
    Ok(())
}

fn is_shared_setting(field: &str) -> bool {
    matches!(
        field,
        "useScheme" | "schemeUri" | "allowMultiple" | "includeOther" | "unit" | "min" | "max"
            | "granularity"
    ) || parse_item_field(field).is_some_and(|(_, f)| f == "value")
}

fn apply_shared(question: &mut Question, field: &str, value: &str) -> Result<(), DomainError> {
    let question_type = question.question_type();
    let unknown = || DomainError::UnknownField {
        field: field.to_string(),
        question_type: question_type.to_string(),
    };

    // Parse once, then write to a copy: an error on any block leaves the
    // question untouched
    enum Setting {
        Bool(bool),
        Number(f64),
        Int(usize, i64),
        Text(String),
    }
    let setting = match field {
        "useScheme" | "allowMultiple" | "includeOther" => Setting::Bool(parse_bool(field, value)?),
        "min" | "max" | "granularity" => {
            let number = parse_number::<f64>(field, value)?;
            if !number.is_finite() {
                return Err(invalid(field, value, "must be a finite number"));
            }
            Setting::Number(number)
        }
        "schemeUri" | "unit" => Setting::Text(value.to_string()),
        _ => match parse_item_field(field) {
            Some((index, _)) => Setting::Int(index, parse_number::<i64>(field, value)?),
            None => return Err(unknown()),
        },
    };

    let mut translations = question.translations.clone();
    for block in translations.values_mut() {
        match (&mut block.details, field, &setting) {
            (Details::Levels(d), "useScheme", Setting::Bool(b)) => d.use_scheme = *b,
            (Details::Levels(d), "schemeUri", Setting::Text(t)) => d.scheme_uri = t.clone(),
            (Details::Levels(d), _, Setting::Int(index, v)) => {
                let len = d.items.len();
                let item = d.items.get_mut(*index).ok_or(DomainError::InvalidItemIndex {
                    index: index + 1,
                    len,
                })?;
                item.value = *v;
            }
            (Details::Options(d), "allowMultiple", Setting::Bool(b)) => d.allow_multiple = *b,
            (Details::Options(d), "includeOther", Setting::Bool(b)) => d.include_other = *b,
            (Details::Range(d), "unit", Setting::Text(t)) => d.unit = t.clone(),
            (Details::Range(d), "min", Setting::Number(n)) => d.min = *n,
            (Details::Range(d), "max", Setting::Number(n)) => d.max = *n,
            (Details::Range(d), "granularity", Setting::Number(n)) => d.granularity = *n,
            _ => return Err(unknown()),
        }
    }
    question.translations = translations;
    Ok(())
}

/// `item.3.shortText` -> `(2, "shortText")`.
fn parse_item_field(field: &str) -> Option<(usize, &str)> {
    let rest = field.strip_prefix("item.")?;
    let (position, name) = rest.split_once('.')?;
    let position: usize = position.parse().ok()?;
    if position == 0 || !matches!(name, "shortText" | "longText" | "value") {
        return None;
    }
    Some((position - 1, name))
}

fn parse_bool(field: &str, value: &str) -> Result<bool, DomainError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid(field, value, "expected true or false")),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, DomainError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| invalid(field, value, &e.to_string()))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn invalid(field: &str, value: &str, reason: &str) -> DomainError {
    DomainError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
