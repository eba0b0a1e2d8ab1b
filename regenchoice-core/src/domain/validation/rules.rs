// regenchoice-core/src/domain/validation/rules.rs

use crate::domain::question::{
    AOrBDetails, Details, ITEM_COUNT_MAX, ITEM_COUNT_MIN, LanguageBlock, LanguageCode,
    LevelsDetails, OptionsDetails, Question, QuestionType, RangeDetails, TripleDetails,
};

use super::report::ValidationReport;

pub const TITLE_MAX_CHARS: usize = 80;

/// Checks every structural rule of a question.
///
/// Order: common fields, then each translation (by language code) with its
/// variant checks, then the advisory language consistency pass.
pub fn validate(question: &Question) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_common(question, &mut report);

    for (language, block) in &question.translations {
        check_block(
            question.question_type(),
            question.item_count,
            language,
            block,
            &mut report,
        );
    }

    check_language_consistency(question, &mut report);

    report
}

fn check_common(question: &Question, report: &mut ValidationReport) {
    if question.id().get() == 0 {
        report.error("id is required");
    }

    if question.translations.is_empty() {
        report.error("translations must have at least one language");
    } else if !question.has_language(&question.default_language) {
        report.error(format!(
            "defaultLanguage '{}' has no translation",
            question.default_language
        ));
    }

    check_item_count_rules(question.question_type(), question.item_count, report);
}

pub(super) fn check_item_count_rules(
    question_type: QuestionType,
    item_count: u32,
    report: &mut ValidationReport,
) {
    if question_type.is_itemized() && !(ITEM_COUNT_MIN..=ITEM_COUNT_MAX).contains(&item_count) {
        report.error(format!(
            "{} itemCount ({}) must be between {} and {}",
            question_type, item_count, ITEM_COUNT_MIN, ITEM_COUNT_MAX
        ));
    }
    if question_type == QuestionType::Triple && item_count % 2 == 0 {
        report.error(format!(
            "TRIPQ itemCount ({}) must be odd (e.g., 5 or 7)",
            item_count
        ));
    }
}

/// Title and variant checks for one translation.
pub(super) fn check_block(
    expected: QuestionType,
    item_count: u32,
    language: &LanguageCode,
    block: &LanguageBlock,
    report: &mut ValidationReport,
) {
    let title_len = block.title.chars().count();
    if block.title.trim().is_empty() {
        report.error(format!("[{}] title is empty", language));
    } else if title_len > TITLE_MAX_CHARS {
        report.error(format!(
            "[{}] title is longer than {} characters ({})",
            language, TITLE_MAX_CHARS, title_len
        ));
    }

    let found = block.details.question_type();
    if found != expected {
        report.error(format!(
            "[{}] details do not match question type {} (found {})",
            language, expected, found
        ));
        return;
    }

    let mut ctx = BlockContext {
        language,
        item_count,
        report,
    };
    match &block.details {
        Details::AOrB(d) => ctx.check_a_or_b(d),
        Details::Fact(_) => {}
        Details::Levels(d) => ctx.check_levels(d),
        Details::Likert(_) => {}
        Details::Options(d) => ctx.check_options(d),
        Details::Range(d) => ctx.check_range(d),
        Details::Triple(d) => ctx.check_triple(d),
    }
}

struct BlockContext<'a> {
    language: &'a LanguageCode,
    item_count: u32,
    report: &'a mut ValidationReport,
}

impl BlockContext<'_> {
    fn error(&mut self, message: impl std::fmt::Display) {
        self.report.error(format!("[{}] {}", self.language, message));
    }

    fn warn(&mut self, message: impl std::fmt::Display) {
        self.report.warn(format!("[{}] {}", self.language, message));
    }

    fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.error(format_args!("{} is required", field));
        }
    }

    fn check_a_or_b(&mut self, d: &AOrBDetails) {
        self.require("pref1", &d.pref1);
        self.require("pref2", &d.pref2);
    }

    fn check_triple(&mut self, d: &TripleDetails) {
        self.require("pref1", &d.pref1);
        self.require("pref2", &d.pref2);
        self.require("midpointShort", &d.midpoint_short);
    }

    fn check_levels(&mut self, d: &LevelsDetails) {
        if d.use_scheme {
            if d.scheme_uri.trim().is_empty() {
                self.error("schemeUri is required when useScheme is set");
            }
            return;
        }

        self.check_item_count("LEVLQ", d.items.len());
        for (position, item) in d.items.iter().enumerate() {
            if item.short_text.trim().is_empty() {
                self.warn(format_args!("item {} has no shortText", position + 1));
            }
        }
    }

    fn check_options(&mut self, d: &OptionsDetails) {
        self.check_item_count("OPTSQ", d.items.len());
        for (position, item) in d.items.iter().enumerate() {
            if item.short_text.trim().is_empty() {
                self.warn(format_args!("item {} has no shortText", position + 1));
            }
        }
    }

    fn check_item_count(&mut self, code: &str, len: usize) {
        let item_count = self.item_count;
        if len == 0 {
            self.error(format_args!("{} must have items", code));
        } else if len != item_count as usize {
            self.error(format_args!(
                "{} item count ({}) does not match itemCount ({})",
                code, len, item_count
            ));
        }
    }

    fn check_range(&mut self, d: &RangeDetails) {
        self.require("unit", &d.unit);

        if !d.min.is_finite() || !d.max.is_finite() {
            self.error("min and max must be finite numbers");
        } else if d.min >= d.max {
            self.error(format_args!(
                "min ({}) must be less than max ({})",
                d.min, d.max
            ));
        }

        if !d.granularity.is_finite() || d.granularity <= 0.0 {
            self.error(format_args!(
                "granularity ({}) must be a positive number",
                d.granularity
            ));
        }
    }
}

/// Warns about optional texts that are filled in for some languages only.
fn check_language_consistency(question: &Question, report: &mut ValidationReport) {
    if question.translations.len() <= 1 {
        return;
    }

    let filled: Vec<(&LanguageCode, Vec<&'static str>)> = question
        .translations
        .iter()
        .map(|(language, block)| {
            let mut fields = Vec::new();
            if block.has_description() {
                fields.push("description");
            }
            fields.extend(block.details.filled_optional_texts());
            (language, fields)
        })
        .collect();

    let mut all_fields: Vec<&'static str> = Vec::new();
    for (_, fields) in &filled {
        for field in fields {
            if !all_fields.contains(field) {
                all_fields.push(field);
            }
        }
    }

    for (language, fields) in &filled {
        let missing: Vec<&str> = all_fields
            .iter()
            .copied()
            .filter(|f| !fields.contains(f))
            .collect();
        if !missing.is_empty() {
            report.warn(format!(
                "Language '{}' missing from: {}",
                language,
                missing.join(", ")
            ));
        }
    }
}
