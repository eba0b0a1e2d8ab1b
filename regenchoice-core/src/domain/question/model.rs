// regenchoice-core/src/domain/question/model.rs

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::details::Details;
use super::language::LanguageCode;
use super::question_type::QuestionType;

/// Upper bound of generated ids (31-bit, always positive).
pub const QUESTION_ID_MAX: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Uniform draw in `1..=QUESTION_ID_MAX`. Uniqueness is only probable;
    /// use `QuestionBank::create_question` to get a collision-checked id.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(1..=QUESTION_ID_MAX))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language-dependent content of a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub details: Details,
}

impl LanguageBlock {
    pub fn new(title: impl Into<String>, details: Details) -> Self {
        Self {
            title: title.into(),
            description: None,
            details,
        }
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}

/// One question record. `id` and `question_type` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "QuestionRecord<RawBlock>",
    into = "QuestionRecord<LanguageBlock>"
)]
pub struct Question {
    id: QuestionId,
    question_type: QuestionType,
    pub relational: bool,
    pub item_count: u32,
    pub learn_more_text: Option<String>,
    pub enabling_question_id: Option<QuestionId>,
    pub enabling_answers: Option<String>,
    pub default_language: LanguageCode,
    pub translations: BTreeMap<LanguageCode, LanguageBlock>,
}

impl Question {
    /// A question with a single translation. `item_count` starts at the
    /// type's default.
    pub fn new(
        id: QuestionId,
        question_type: QuestionType,
        language: LanguageCode,
        block: LanguageBlock,
    ) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(language.clone(), block);
        Self {
            id,
            question_type,
            relational: false,
            item_count: question_type.default_item_count(),
            learn_more_text: None,
            enabling_question_id: None,
            enabling_answers: None,
            default_language: language,
            translations,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.translations.keys()
    }

    pub fn has_language(&self, language: &LanguageCode) -> bool {
        self.translations.contains_key(language)
    }

    pub fn block(&self, language: &LanguageCode) -> Option<&LanguageBlock> {
        self.translations.get(language)
    }

    pub fn default_block(&self) -> Option<&LanguageBlock> {
        self.translations.get(&self.default_language)
    }

    /// Title in `language`, falling back to the default language, then to
    /// any translation.
    pub fn title_in(&self, language: &LanguageCode) -> Option<&str> {
        self.block(language)
            .or_else(|| self.default_block())
            .or_else(|| self.translations.values().next())
            .map(|b| b.title.as_str())
    }
}

// --- SERDE DTOs ---
// The JSON interchange shape. Decoding goes through `RawBlock` so that each
// `details` object is interpreted with the question's type.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord<B> {
    id: QuestionId,
    #[serde(rename = "type")]
    question_type: QuestionType,
    relational: bool,
    #[serde(default)]
    item_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    learn_more_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enabling_question_id: Option<QuestionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enabling_answers: Option<String>,
    default_language: LanguageCode,
    translations: BTreeMap<LanguageCode, B>,
}

#[derive(Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    details: serde_json::Value,
}

impl TryFrom<QuestionRecord<RawBlock>> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord<RawBlock>) -> Result<Self, Self::Error> {
        let mut translations = BTreeMap::new();
        for (language, raw) in record.translations {
            let details = Details::from_value(record.question_type, raw.details)
                .map_err(|e| format!("translations.{}.details: {}", language, e))?;
            translations.insert(
                language,
                LanguageBlock {
                    title: raw.title,
                    description: raw.description,
                    details,
                },
            );
        }

        Ok(Self {
            id: record.id,
            question_type: record.question_type,
            relational: record.relational,
            item_count: record.item_count,
            learn_more_text: record.learn_more_text,
            enabling_question_id: record.enabling_question_id,
            enabling_answers: record.enabling_answers,
            default_language: record.default_language,
            translations,
        })
    }
}

impl From<Question> for QuestionRecord<LanguageBlock> {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question_type: q.question_type,
            relational: q.relational,
            item_count: q.item_count,
            learn_more_text: q.learn_more_text,
            enabling_question_id: q.enabling_question_id,
            enabling_answers: q.enabling_answers,
            default_language: q.default_language,
            translations: q.translations,
        }
    }
}
