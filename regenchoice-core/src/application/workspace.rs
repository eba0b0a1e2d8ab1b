// regenchoice-core/src/application/workspace.rs

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::application::bank::QuestionBank;
use crate::domain::error::DomainError;
use crate::domain::validation::{CollectionReport, validate_value_collection};
use crate::error::RegenError;
use crate::infrastructure::store::{
    document::decode_questions, read_question_values, write_questions_file,
};
use crate::ports::store::{QuestionStore, SaveOutcome};

/// Label of a bank backed by `store`, e.g. `store: data/questions.json`.
pub async fn store_label(store: &dyn QuestionStore) -> Result<String, RegenError> {
    let info = store.info().await?;
    Ok(format!("store: {}", info.questions_file.display()))
}

/// Loads the store into a clean (not dirty) bank.
#[instrument(skip(store))]
pub async fn open_bank(store: &dyn QuestionStore) -> Result<QuestionBank, RegenError> {
    let outcome = store.load().await?;
    let label = store_label(store).await?;
    info!(count = outcome.count, source = %label, "Bank opened");
    Ok(QuestionBank::from_questions(outcome.questions, label))
}

/// Persists the bank. Nothing is written while any question has errors.
#[instrument(skip(store, bank), fields(count = bank.len()))]
pub async fn save_bank(
    store: &dyn QuestionStore,
    bank: &mut QuestionBank,
) -> Result<SaveOutcome, RegenError> {
    let report = bank.validate();
    if !report.valid() {
        warn!(summary = %report.summary(), "Save blocked by validation errors");
        return Err(DomainError::InvalidCollection(flatten_errors(&report)).into());
    }

    let outcome = store.save(bank.questions()).await?;
    let label = store_label(store).await?;
    bank.mark_saved(label);
    Ok(outcome)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub replaced: bool,
}

/// Reads a question file into the bank. The whole file is validated first
/// and refused if anything in it has errors. With `replace` the bank's list
/// is swapped out, otherwise the questions are appended (ids must be new).
#[instrument(skip(bank))]
pub fn import_file(
    bank: &mut QuestionBank,
    path: &Path,
    replace: bool,
) -> Result<ImportOutcome, RegenError> {
    let values = read_question_values(path)?;
    let report = validate_value_collection(&values);
    if !report.valid() {
        return Err(DomainError::InvalidCollection(flatten_errors(&report)).into());
    }

    let questions = decode_questions(values)?;
    let imported = questions.len();

    if replace {
        bank.replace_all(questions);
    } else {
        // Check every id before adding any
        for q in &questions {
            if bank.position(q.id()).is_some() {
                return Err(DomainError::DuplicateQuestionId(q.id().get()).into());
            }
        }
        for q in questions {
            bank.add(q)?;
        }
    }

    info!(imported, replace, "Questions imported");
    Ok(ImportOutcome { imported, replaced: replace })
}

/// Writes the bank to a standalone question file. Returns bytes written.
#[instrument(skip(bank))]
pub fn export_file(bank: &QuestionBank, path: &Path) -> Result<usize, RegenError> {
    let bytes = write_questions_file(path, bank.questions())?;
    info!(bytes, count = bank.len(), "Questions exported");
    Ok(bytes)
}

/// Every error of the report, each prefixed with the question it belongs to.
pub fn flatten_errors(report: &CollectionReport) -> Vec<String> {
    let mut errors = report.errors.clone();
    for entry in &report.questions {
        let label = match entry.id {
            Some(id) => format!("question {} (id {})", entry.index + 1, id),
            None => format!("question {}", entry.index + 1),
        };
        errors.extend(entry.report.errors.iter().map(|e| format!("{}: {}", label, e)));
    }
    errors
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::project::StoreConfig;
    use crate::domain::question::{LanguageCode, QuestionId, QuestionType, create_question_with_id};
    use crate::infrastructure::store::JsonFileStore;
    use anyhow::Result;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::parse(code).unwrap()
    }

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(StoreConfig::default().resolve(dir.path()))
    }

    #[tokio::test]
    async fn test_open_edit_save_cycle() -> Result<()> {
        let dir = tempdir()?;
        let store = store_in(&dir);

        let mut bank = open_bank(&store).await?;
        assert!(bank.is_empty());
        assert!(bank.source().starts_with("store: "));

        let q = bank.create_question(QuestionType::Levels, lang("en"));
        bank.commit(q.clone())?;
        let outcome = save_bank(&store, &mut bank).await?;
        assert_eq!(outcome.count, 1);
        assert!(!bank.is_dirty());

        let reopened = open_bank(&store).await?;
        assert_eq!(reopened.questions(), &[q]);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_bank_is_never_written() -> Result<()> {
        let dir = tempdir()?;
        let store = store_in(&dir);
        let mut bank = open_bank(&store).await?;

        let mut q = create_question_with_id(QuestionId::new(5), QuestionType::Range, lang("en"));
        q.translations.get_mut(&lang("en")).unwrap().title.clear();
        bank.add(q)?;

        let err = save_bank(&store, &mut bank).await.unwrap_err();
        match err {
            RegenError::Domain(DomainError::InvalidCollection(errors)) => {
                assert_eq!(errors, vec!["question 1 (id 5): [en] title is empty"]);
            }
            other => anyhow::bail!("unexpected error {:?}", other),
        }
        assert!(bank.is_dirty());
        assert!(!store.settings().questions_file.exists());
        Ok(())
    }

    #[test]
    fn test_export_then_import() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("regenchoice-questions.json");

        let mut source = QuestionBank::new("new list");
        for id in 1..=3 {
            source.add(create_question_with_id(
                QuestionId::new(id),
                QuestionType::Options,
                lang("en"),
            ))?;
        }
        export_file(&source, &path)?;

        let mut target = QuestionBank::new("new list");
        let outcome = import_file(&mut target, &path, false)?;
        assert_eq!(outcome.imported, 3);
        assert_eq!(target.questions(), source.questions());

        // Appending the same ids again is refused without partial imports
        assert!(matches!(
            import_file(&mut target, &path, false),
            Err(RegenError::Domain(DomainError::DuplicateQuestionId(1)))
        ));
        assert_eq!(target.len(), 3);

        let outcome = import_file(&mut target, &path, true)?;
        assert!(outcome.replaced);
        assert_eq!(target.len(), 3);
        Ok(())
    }

    #[test]
    fn test_import_refuses_invalid_files() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"[{"id": 0, "type": "XYZQ"}]"#)?;

        let mut bank = QuestionBank::new("new list");
        let err = import_file(&mut bank, &path, false).unwrap_err();
        match err {
            RegenError::Domain(DomainError::InvalidCollection(errors)) => {
                assert!(!errors.is_empty());
                assert!(errors.iter().all(|e| e.starts_with("question 1")));
            }
            other => anyhow::bail!("unexpected error {:?}", other),
        }
        assert!(bank.is_empty());
        Ok(())
    }
}
