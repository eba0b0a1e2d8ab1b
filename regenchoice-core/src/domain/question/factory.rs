// regenchoice-core/src/domain/question/factory.rs

use super::details::{
    AOrBDetails, Details, FactDetails, LevelItem, LevelsDetails, LikertDetails, OptionItem,
    OptionsDetails, RangeDetails, TripleDetails,
};
use super::language::LanguageCode;
use super::model::{LanguageBlock, Question, QuestionId};
use super::question_type::{ITEM_COUNT_MAX, ITEM_COUNT_MIN, QuestionType};
use crate::domain::error::DomainError;

// --- CREATION ---

/// Builds a fresh question of `question_type` with one translation.
///
/// Required text fields get placeholder content so the new question passes
/// validation straight away; authors overwrite them while editing.
pub fn create_question(question_type: QuestionType, initial_language: LanguageCode) -> Question {
    create_question_with_id(QuestionId::random(), question_type, initial_language)
}

pub fn create_question_with_id(
    id: QuestionId,
    question_type: QuestionType,
    initial_language: LanguageCode,
) -> Question {
    let item_count = question_type.default_item_count();
    let block = LanguageBlock {
        title: format!("New {} question", question_type),
        description: Some(String::new()),
        details: placeholder_details(question_type, item_count),
    };
    Question::new(id, question_type, initial_language, block)
}

fn placeholder_details(question_type: QuestionType, item_count: u32) -> Details {
    match question_type {
        QuestionType::AOrB => Details::AOrB(AOrBDetails {
            pref1: "Option A".into(),
            pref2: "Option B".into(),
            ..Default::default()
        }),
        QuestionType::Fact => Details::Fact(FactDetails {}),
        QuestionType::Levels => Details::Levels(LevelsDetails {
            use_scheme: false,
            scheme_uri: String::new(),
            items: (1..=item_count)
                .map(|n| LevelItem {
                    short_text: format!("Level {}", n),
                    long_text: String::new(),
                    value: i64::from(n),
                })
                .collect(),
        }),
        QuestionType::Likert => Details::Likert(LikertDetails::default()),
        QuestionType::Options => Details::Options(OptionsDetails {
            allow_multiple: false,
            include_other: false,
            items: (1..=item_count)
                .map(|n| OptionItem {
                    short_text: format!("Option {}", n),
                    long_text: String::new(),
                })
                .collect(),
        }),
        QuestionType::Range => Details::Range(RangeDetails {
            unit: "units".into(),
            ..Default::default()
        }),
        QuestionType::Triple => Details::Triple(TripleDetails {
            pref1: "Option A".into(),
            pref2: "Option B".into(),
            midpoint_short: "Neither".into(),
            ..Default::default()
        }),
    }
}

/// Empty content of the variant's shape. Language-independent settings
/// (range bounds, scheme, option flags, level values) come from `template`.
fn blank_details(question_type: QuestionType, item_count: u32, template: Option<&Details>) -> Details {
    match question_type {
        QuestionType::AOrB => Details::AOrB(AOrBDetails::default()),
        QuestionType::Fact => Details::Fact(FactDetails {}),
        QuestionType::Levels => {
            let source = match template {
                Some(Details::Levels(d)) => Some(d),
                _ => None,
            };
            Details::Levels(LevelsDetails {
                use_scheme: source.is_some_and(|d| d.use_scheme),
                scheme_uri: source.map(|d| d.scheme_uri.clone()).unwrap_or_default(),
                items: (0..item_count as usize)
                    .map(|i| LevelItem {
                        value: source
                            .and_then(|d| d.items.get(i))
                            .map_or(i as i64 + 1, |item| item.value),
                        ..Default::default()
                    })
                    .collect(),
            })
        }
        QuestionType::Likert => Details::Likert(LikertDetails::default()),
        QuestionType::Options => {
            let (allow_multiple, include_other) = match template {
                Some(Details::Options(d)) => (d.allow_multiple, d.include_other),
                _ => (false, false),
            };
            Details::Options(OptionsDetails {
                allow_multiple,
                include_other,
                items: vec![OptionItem::default(); item_count as usize],
            })
        }
        QuestionType::Range => match template {
            Some(Details::Range(d)) => Details::Range(d.clone()),
            _ => Details::Range(RangeDetails::default()),
        },
        QuestionType::Triple => Details::Triple(TripleDetails::default()),
    }
}

// --- TRANSLATIONS ---

/// Adds `new_language` to the question.
///
/// Returns `true` when the content was copied from `copy_from`, `false` when
/// a blank block was created (also when `copy_from` names a missing language).
pub fn add_translation(
    question: &mut Question,
    new_language: LanguageCode,
    copy_from: Option<&LanguageCode>,
) -> Result<bool, DomainError> {
    if question.has_language(&new_language) {
        return Err(DomainError::DuplicateLanguage(new_language.to_string()));
    }

    if let Some(source) = copy_from.and_then(|lang| question.block(lang)) {
        let copied = source.clone();
        question.translations.insert(new_language, copied);
        return Ok(true);
    }

    let template = question.default_block().map(|b| &b.details);
    let details = blank_details(question.question_type(), question.item_count, template);
    question.translations.insert(
        new_language,
        LanguageBlock {
            title: String::new(),
            description: None,
            details,
        },
    );
    Ok(false)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub removed: LanguageCode,
    /// Set when the removed language was the default and another one took over.
    pub promoted_default: Option<LanguageCode>,
}

/// Removes a translation. When it was the default language, the first
/// remaining language (by code) becomes the default.
pub fn remove_translation(
    question: &mut Question,
    language: &LanguageCode,
) -> Result<Removal, DomainError> {
    if !question.has_language(language) {
        return Err(DomainError::UnknownLanguage(language.to_string()));
    }
    if question.translations.len() <= 1 {
        return Err(DomainError::LastLanguage(language.to_string()));
    }

    question.translations.remove(language);

    let mut promoted_default = None;
    if &question.default_language == language {
        if let Some(next) = question.translations.keys().next().cloned() {
            question.default_language = next.clone();
            promoted_default = Some(next);
        }
    }

    Ok(Removal {
        removed: language.clone(),
        promoted_default,
    })
}

// --- ITEMS (LEVLQ / OPTSQ) ---

/// Appends a blank item to every translation. Returns the new `itemCount`.
pub fn add_item(question: &mut Question) -> Result<u32, DomainError> {
    ensure_has_items(question)?;
    if question.item_count >= ITEM_COUNT_MAX {
        return Err(DomainError::ItemLimit {
            min: ITEM_COUNT_MIN,
            max: ITEM_COUNT_MAX,
        });
    }

    let new_count = question.item_count + 1;
    for block in question.translations.values_mut() {
        resize_items(&mut block.details, new_count as usize);
    }
    question.item_count = new_count;
    Ok(new_count)
}

/// Removes the item at `index` from every translation. LEVLQ values are
/// renumbered from 1. Returns the new `itemCount`.
pub fn remove_item(question: &mut Question, index: usize) -> Result<u32, DomainError> {
    ensure_has_items(question)?;
    let len = question.item_count as usize;
    if index >= len {
        return Err(DomainError::InvalidItemIndex { index, len });
    }
    if question.item_count <= ITEM_COUNT_MIN {
        return Err(DomainError::ItemLimit {
            min: ITEM_COUNT_MIN,
            max: ITEM_COUNT_MAX,
        });
    }

    let new_count = question.item_count - 1;
    for block in question.translations.values_mut() {
        match &mut block.details {
            Details::Levels(d) => {
                if index < d.items.len() {
                    d.items.remove(index);
                }
                d.items.resize_with(new_count as usize, LevelItem::default);
                for (position, item) in d.items.iter_mut().enumerate() {
                    item.value = position as i64 + 1;
                }
            }
            Details::Options(d) => {
                if index < d.items.len() {
                    d.items.remove(index);
                }
                d.items.resize_with(new_count as usize, OptionItem::default);
            }
            _ => {}
        }
    }
    question.item_count = new_count;
    Ok(new_count)
}

/// Sets `itemCount`. For LEVLQ and OPTSQ every block's items are grown with
/// blank entries or truncated to match, within the 2..=10 range. Other types
/// take the number as is and leave range checks to the validator.
pub fn set_item_count(question: &mut Question, count: u32) -> Result<u32, DomainError> {
    if question.question_type().has_items() {
        if !(ITEM_COUNT_MIN..=ITEM_COUNT_MAX).contains(&count) {
            return Err(DomainError::ItemLimit {
                min: ITEM_COUNT_MIN,
                max: ITEM_COUNT_MAX,
            });
        }
        for block in question.translations.values_mut() {
            resize_items(&mut block.details, count as usize);
        }
    }
    question.item_count = count;
    Ok(count)
}

fn ensure_has_items(question: &Question) -> Result<(), DomainError> {
    if question.question_type().has_items() {
        Ok(())
    } else {
        Err(DomainError::NotItemized(question.question_type().to_string()))
    }
}

fn resize_items(details: &mut Details, len: usize) {
    match details {
        Details::Levels(d) => {
            let mut next_value = d.items.len() as i64;
            d.items.resize_with(len, || {
                next_value += 1;
                LevelItem {
                    value: next_value,
                    ..Default::default()
                }
            });
        }
        Details::Options(d) => d.items.resize_with(len, OptionItem::default),
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::parse(code).unwrap()
    }

    #[test]
    fn test_create_sets_variant_defaults() {
        let q = create_question(QuestionType::Levels, lang("en"));
        assert_eq!(q.item_count, 5);
        assert_eq!(q.default_language, lang("en"));
        match &q.default_block().unwrap().details {
            Details::Levels(d) => {
                let values: Vec<i64> = d.items.iter().map(|i| i.value).collect();
                assert_eq!(values, vec![1, 2, 3, 4, 5]);
                assert!(!d.use_scheme);
            }
            other => panic!("expected levels details, got {:?}", other),
        }

        let fact = create_question(QuestionType::Fact, lang("en"));
        assert_eq!(fact.item_count, 0);
        let range = create_question(QuestionType::Range, lang("en"));
        match &range.default_block().unwrap().details {
            Details::Range(r) => {
                assert_eq!((r.min, r.max, r.granularity), (0.0, 100.0, 1.0));
            }
            other => panic!("expected range details, got {:?}", other),
        }
    }

    #[test]
    fn test_add_translation_copy() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Triple, lang("en"));
        let copied = add_translation(&mut q, lang("fr"), Some(&lang("en")))?;
        assert!(copied);
        assert_eq!(q.block(&lang("fr")), q.block(&lang("en")));
        Ok(())
    }

    #[test]
    fn test_add_translation_blank_keeps_language_independent_settings() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Range, lang("en"));
        if let Some(Details::Range(r)) = q
            .translations
            .get_mut(&lang("en"))
            .map(|b| &mut b.details)
        {
            r.unit = "km".into();
            r.max = 42.0;
        }

        let copied = add_translation(&mut q, lang("de"), None)?;
        assert!(!copied);
        let de = q.block(&lang("de")).unwrap();
        assert!(de.title.is_empty());
        match &de.details {
            Details::Range(r) => {
                assert_eq!(r.unit, "km");
                assert_eq!(r.max, 42.0);
            }
            other => anyhow::bail!("expected range details, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_add_translation_blank_items_sized_to_item_count() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Options, lang("en"));
        q.item_count = 3;
        add_translation(&mut q, lang("nl"), Some(&lang("xx")))?;
        match &q.block(&lang("nl")).unwrap().details {
            Details::Options(d) => {
                assert_eq!(d.items.len(), 3);
                assert!(d.items.iter().all(|i| i.short_text.is_empty()));
            }
            other => anyhow::bail!("expected options details, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_duplicate_language_is_rejected_without_mutation() {
        let mut q = create_question(QuestionType::AOrB, lang("en"));
        let before = q.clone();
        let err = add_translation(&mut q, lang("en"), None).unwrap_err();
        assert_eq!(err, DomainError::DuplicateLanguage("en".into()));
        assert_eq!(q, before);
    }

    #[test]
    fn test_last_language_cannot_be_removed() {
        let mut q = create_question(QuestionType::Likert, lang("en"));
        let before = q.clone();
        let err = remove_translation(&mut q, &lang("en")).unwrap_err();
        assert_eq!(err, DomainError::LastLanguage("en".into()));
        assert_eq!(q, before);
    }

    #[test]
    fn test_removing_default_promotes_next_language() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Fact, lang("fr"));
        add_translation(&mut q, lang("en"), Some(&lang("fr")))?;
        add_translation(&mut q, lang("nl"), Some(&lang("fr")))?;

        let removal = remove_translation(&mut q, &lang("fr"))?;
        assert_eq!(removal.promoted_default, Some(lang("en")));
        assert_eq!(q.default_language, lang("en"));

        let removal = remove_translation(&mut q, &lang("nl"))?;
        assert_eq!(removal.promoted_default, None);
        assert!(matches!(
            remove_translation(&mut q, &lang("de")),
            Err(DomainError::UnknownLanguage(_))
        ));
        Ok(())
    }

    #[test]
    fn test_add_and_remove_items() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Levels, lang("en"));
        add_translation(&mut q, lang("fr"), Some(&lang("en")))?;

        assert_eq!(add_item(&mut q)?, 6);
        for block in q.translations.values() {
            assert_eq!(block.details.item_len(), Some(6));
        }

        assert_eq!(remove_item(&mut q, 0)?, 5);
        match &q.block(&lang("fr")).unwrap().details {
            Details::Levels(d) => {
                assert_eq!(d.items[0].short_text, "Level 2");
                let values: Vec<i64> = d.items.iter().map(|i| i.value).collect();
                assert_eq!(values, vec![1, 2, 3, 4, 5]);
            }
            other => anyhow::bail!("expected levels details, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_item_limits() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Options, lang("en"));
        while q.item_count < ITEM_COUNT_MAX {
            add_item(&mut q)?;
        }
        assert!(matches!(add_item(&mut q), Err(DomainError::ItemLimit { .. })));
        assert!(matches!(
            remove_item(&mut q, 10),
            Err(DomainError::InvalidItemIndex { index: 10, len: 10 })
        ));

        q.item_count = 2;
        assert!(matches!(remove_item(&mut q, 0), Err(DomainError::ItemLimit { .. })));

        let mut fact = create_question(QuestionType::Fact, lang("en"));
        assert!(matches!(add_item(&mut fact), Err(DomainError::NotItemized(_))));
        Ok(())
    }

    #[test]
    fn test_set_item_count_resizes_items() -> anyhow::Result<()> {
        let mut q = create_question(QuestionType::Levels, lang("en"));
        add_translation(&mut q, lang("fr"), None)?;

        set_item_count(&mut q, 3)?;
        for block in q.translations.values() {
            assert_eq!(block.details.item_len(), Some(3));
        }

        set_item_count(&mut q, 7)?;
        match &q.block(&lang("en")).unwrap().details {
            Details::Levels(d) => {
                assert_eq!(d.items[2].short_text, "Level 3");
                assert!(d.items[6].short_text.is_empty());
                assert_eq!(d.items[6].value, 7);
            }
            other => anyhow::bail!("expected levels details, got {:?}", other),
        }

        assert!(matches!(set_item_count(&mut q, 11), Err(DomainError::ItemLimit { .. })));
        assert_eq!(q.item_count, 7);

        // No items to resize; the validator judges the value
        let mut triple = create_question(QuestionType::Triple, lang("en"));
        assert_eq!(set_item_count(&mut triple, 4)?, 4);
        Ok(())
    }
}
