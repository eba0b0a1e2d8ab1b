// regenchoice-core/src/domain/question/question_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of question structures. Serialized as the upper-case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// A or B preference
    #[serde(rename = "AORBQ")]
    AOrB,
    /// Factual Yes / No / Don't know
    #[serde(rename = "FACTQ")]
    Fact,
    /// Ordered levels
    #[serde(rename = "LEVLQ")]
    Levels,
    /// Likert scale
    #[serde(rename = "LIKSQ")]
    Likert,
    /// Unordered options, multiple choice style
    #[serde(rename = "OPTSQ")]
    Options,
    /// Numeric range
    #[serde(rename = "RANGQ")]
    Range,
    /// A or B with a named midpoint
    #[serde(rename = "TRIPQ")]
    Triple,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        Self::AOrB,
        Self::Fact,
        Self::Levels,
        Self::Likert,
        Self::Options,
        Self::Range,
        Self::Triple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AOrB => "AORBQ",
            Self::Fact => "FACTQ",
            Self::Levels => "LEVLQ",
            Self::Likert => "LIKSQ",
            Self::Options => "OPTSQ",
            Self::Range => "RANGQ",
            Self::Triple => "TRIPQ",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AOrB => "A preference between two alternatives, A or B",
            Self::Fact => "A factual question with answer Yes or No or Don't Know",
            Self::Levels => "Ordered options presented as levels",
            Self::Likert => "A classic Likert scale question",
            Self::Options => "A list of (unordered) options, multiple choice style",
            Self::Range => "A question with a numeric range",
            Self::Triple => "Binary choice with a named midpoint option",
        }
    }

    /// Types whose `itemCount` must stay within [`ITEM_COUNT_MIN`, `ITEM_COUNT_MAX`].
    /// AORBQ is conventionally 5 but never enforced.
    pub fn is_itemized(&self) -> bool {
        matches!(
            self,
            Self::Levels | Self::Likert | Self::Options | Self::Triple
        )
    }

    /// Types that carry an explicit `items` list in their details.
    pub fn has_items(&self) -> bool {
        matches!(self, Self::Levels | Self::Options)
    }

    /// `itemCount` assigned by the factory.
    pub fn default_item_count(&self) -> u32 {
        match self {
            Self::Fact | Self::Range => 0,
            Self::AOrB | Self::Levels | Self::Likert | Self::Options | Self::Triple => 5,
        }
    }
}

pub const ITEM_COUNT_MIN: u32 = 2;
pub const ITEM_COUNT_MAX: u32 = 10;

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == code)
            .ok_or_else(|| format!("Unknown question type: {}", s))
    }
}
