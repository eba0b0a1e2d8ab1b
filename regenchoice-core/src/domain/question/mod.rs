// regenchoice-core/src/domain/question/mod.rs

pub mod details;
pub mod factory;
pub mod language;
pub mod model;
pub mod question_type;

// Re-exports
pub use details::{
    AOrBDetails, Details, FactDetails, LevelItem, LevelsDetails, LikertDetails, OptionItem,
    OptionsDetails, RangeDetails, TripleDetails,
};
pub use factory::{
    Removal, add_item, add_translation, create_question, create_question_with_id, remove_item,
    remove_translation, set_item_count,
};
pub use language::{COMMON_LANGUAGES, LanguageCode};
pub use model::{LanguageBlock, QUESTION_ID_MAX, Question, QuestionId};
pub use question_type::{ITEM_COUNT_MAX, ITEM_COUNT_MIN, QuestionType};
