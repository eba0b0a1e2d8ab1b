// regenchoice-core/src/domain/question/details.rs

use serde::{Deserialize, Serialize};

use super::question_type::QuestionType;

// --- VARIANT PAYLOADS ---
// Every text field defaults to "" so that incomplete JSON still decodes and
// the validator gets to report what is missing.

/// AORBQ: two named alternatives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AOrBDetails {
    pub pref1: String,
    pub pref2: String,
    pub prefer1_desc: String,
    pub prefer2_desc: String,
}

/// LEVLQ: ordered levels, either itemized or taken from a published scheme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelsDetails {
    pub use_scheme: bool,
    pub scheme_uri: String,
    pub items: Vec<LevelItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelItem {
    pub short_text: String,
    pub long_text: String,
    pub value: i64,
}

/// LIKSQ: the statement the respondent agrees or disagrees with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LikertDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_statement: Option<String>,
}

impl LikertDetails {
    /// The position statement, or `title` when none is set.
    pub fn position_or<'a>(&'a self, title: &'a str) -> &'a str {
        match self.position_statement.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => title,
        }
    }
}

/// OPTSQ: a list of selectable options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsDetails {
    pub allow_multiple: bool,
    pub include_other: bool,
    pub items: Vec<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionItem {
    pub short_text: String,
    pub long_text: String,
}

/// RANGQ: numeric slider. `unit` is language-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeDetails {
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub granularity: f64,
}

impl Default for RangeDetails {
    fn default() -> Self {
        Self {
            unit: String::new(),
            min: 0.0,
            max: 100.0,
            granularity: 1.0,
        }
    }
}

/// TRIPQ: two alternatives plus a named midpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripleDetails {
    pub pref1: String,
    pub pref2: String,
    pub midpoint_short: String,
    pub prefer1_desc: String,
    pub prefer2_desc: String,
    pub midpoint_desc: String,
}

/// FACTQ carries no payload; it serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactDetails {}

// --- TAGGED UNION ---

/// Variant-specific content of a language block.
///
/// The JSON form is untagged: the owning question's `type` selects the shape
/// on decode (see [`Details::from_value`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    AOrB(AOrBDetails),
    Fact(FactDetails),
    Levels(LevelsDetails),
    Likert(LikertDetails),
    Options(OptionsDetails),
    Range(RangeDetails),
    Triple(TripleDetails),
}

impl Details {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::AOrB(_) => QuestionType::AOrB,
            Self::Fact(_) => QuestionType::Fact,
            Self::Levels(_) => QuestionType::Levels,
            Self::Likert(_) => QuestionType::Likert,
            Self::Options(_) => QuestionType::Options,
            Self::Range(_) => QuestionType::Range,
            Self::Triple(_) => QuestionType::Triple,
        }
    }

    /// Decodes a raw `details` object using the shape of `question_type`.
    /// `null` decodes to the variant's defaults.
    pub fn from_value(
        question_type: QuestionType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };
        Ok(match question_type {
            QuestionType::AOrB => Self::AOrB(serde_json::from_value(value)?),
            QuestionType::Fact => Self::Fact(serde_json::from_value(value)?),
            QuestionType::Levels => Self::Levels(serde_json::from_value(value)?),
            QuestionType::Likert => Self::Likert(serde_json::from_value(value)?),
            QuestionType::Options => Self::Options(serde_json::from_value(value)?),
            QuestionType::Range => Self::Range(serde_json::from_value(value)?),
            QuestionType::Triple => Self::Triple(serde_json::from_value(value)?),
        })
    }

    /// Number of entries in the `items` list, for the variants that have one.
    pub fn item_len(&self) -> Option<usize> {
        match self {
            Self::Levels(d) => Some(d.items.len()),
            Self::Options(d) => Some(d.items.len()),
            _ => None,
        }
    }

    /// Optional long-text fields that are filled in, by JSON field name.
    /// Used by the language consistency pass.
    pub fn filled_optional_texts(&self) -> Vec<&'static str> {
        fn filled(s: &str) -> bool {
            !s.trim().is_empty()
        }

        let mut fields = Vec::new();
        match self {
            Self::AOrB(d) => {
                if filled(&d.prefer1_desc) {
                    fields.push("prefer1Desc");
                }
                if filled(&d.prefer2_desc) {
                    fields.push("prefer2Desc");
                }
            }
            Self::Triple(d) => {
                if filled(&d.prefer1_desc) {
                    fields.push("prefer1Desc");
                }
                if filled(&d.prefer2_desc) {
                    fields.push("prefer2Desc");
                }
                if filled(&d.midpoint_desc) {
                    fields.push("midpointDesc");
                }
            }
            Self::Likert(d) => {
                if d.position_statement.as_deref().is_some_and(filled) {
                    fields.push("positionStatement");
                }
            }
            Self::Levels(d) => {
                if d.items.iter().any(|i| filled(&i.long_text)) {
                    fields.push("items.longText");
                }
            }
            Self::Options(d) => {
                if d.items.iter().any(|i| filled(&i.long_text)) {
                    fields.push("items.longText");
                }
            }
            Self::Fact(_) | Self::Range(_) => {}
        }
        fields
    }
}
