// regenchoice-core/src/infrastructure/store/json_file.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::domain::project::StoreSettings;
use crate::domain::question::Question;
use crate::error::RegenError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, copy_to_free_name};
use crate::ports::store::{LoadOutcome, QuestionStore, SaveOutcome, StoreInfo};

use super::document::{decode_questions, encode_questions, parse_question_values};

const BACKUP_INFIX: &str = ".backup.";

/// Single-file JSON store.
///
/// Every save first copies the current file to
/// `<file>.backup.<YYYY-mm-dd-HHMMSS>` and keeps only the newest
/// `backup_keep` copies.
pub struct JsonFileStore {
    settings: StoreSettings,
}

impl JsonFileStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    fn file_label(&self) -> String {
        self.settings.questions_file.display().to_string()
    }

    async fn read_values(&self) -> Result<Option<Vec<Value>>, InfrastructureError> {
        let path = &self.settings.questions_file;
        if !tokio::fs::try_exists(path).await? {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(path).await?;
        parse_question_values(&content, &self.file_label()).map(Some)
    }

    /// Backups of this store, oldest first.
    pub fn backups(&self) -> Vec<PathBuf> {
        list_backups(&self.settings.data_dir, &self.settings.questions_file)
    }
}

#[async_trait]
impl QuestionStore for JsonFileStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<LoadOutcome, RegenError> {
        let Some(values) = self.read_values().await? else {
            info!("No questions file yet, starting empty");
            return Ok(LoadOutcome {
                questions: Vec::new(),
                count: 0,
                last_modified: None,
            });
        };

        let questions = decode_questions(values)?;
        let last_modified = tokio::fs::metadata(&self.settings.questions_file)
            .await
            .ok()
            .and_then(|m| modified_at(&m));
        info!(count = questions.len(), "Questions loaded");

        Ok(LoadOutcome {
            count: questions.len(),
            questions,
            last_modified,
        })
    }

    async fn load_raw(&self) -> Result<Vec<Value>, RegenError> {
        Ok(self.read_values().await?.unwrap_or_default())
    }

    #[instrument(skip(self, questions), fields(count = questions.len()))]
    async fn save(&self, questions: &[Question]) -> Result<SaveOutcome, RegenError> {
        let content = encode_questions(questions)?;
        let limit = self.settings.max_payload_bytes;
        if content.len() as u64 > limit {
            warn!(bytes = content.len(), limit, "Refusing oversized save");
            return Err(InfrastructureError::PayloadTooLarge {
                bytes: content.len(),
                limit,
            }
            .into());
        }

        // Backup rotation and the write itself are blocking file work
        let settings = self.settings.clone();
        let bytes = tokio::task::spawn_blocking(move || write_with_backup(&settings, content))
            .await
            .map_err(|e| InfrastructureError::Io(std::io::Error::other(e)))??;
        info!(bytes, "Questions saved");

        Ok(SaveOutcome {
            count: questions.len(),
            bytes,
        })
    }

    async fn info(&self) -> Result<StoreInfo, RegenError> {
        let file = &self.settings.questions_file;
        let metadata = tokio::fs::metadata(file).await.ok();
        let writable = tokio::fs::metadata(&self.settings.data_dir)
            .await
            .map(|m| m.is_dir() && !m.permissions().readonly())
            .unwrap_or(false);

        Ok(StoreInfo {
            data_dir: self.settings.data_dir.clone(),
            questions_file: file.clone(),
            file_exists: metadata.is_some(),
            writable,
            file_size: metadata.as_ref().map(|m| m.len()),
            last_modified: metadata.as_ref().and_then(modified_at),
        })
    }
}

fn modified_at(metadata: &fs::Metadata) -> Option<DateTime<Utc>> {
    metadata.modified().ok().map(DateTime::<Utc>::from)
}

fn write_with_backup(settings: &StoreSettings, content: String) -> Result<usize, InfrastructureError> {
    fs::create_dir_all(&settings.data_dir)?;
    backup_current(settings)?;
    atomic_write(&settings.questions_file, content)
}

fn backup_current(settings: &StoreSettings) -> Result<Option<PathBuf>, InfrastructureError> {
    let file = &settings.questions_file;
    if !file.exists() {
        return Ok(None);
    }

    let stamp = Utc::now().format("%Y-%m-%d-%H%M%S");
    let base = PathBuf::from(format!("{}{}{}", file.display(), BACKUP_INFIX, stamp));
    let backup = copy_to_free_name(file, &base)?;
    debug!(backup = ?backup, "Backup taken");

    let backups = list_backups(&settings.data_dir, file);
    prune_backups(&backups, settings.backup_keep)?;
    Ok(Some(backup))
}

fn list_backups(data_dir: &Path, questions_file: &Path) -> Vec<PathBuf> {
    let prefix = format!(
        "{}{}",
        questions_file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        BACKUP_INFIX
    );

    let mut backups: Vec<(SystemTime, PathBuf)> = WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
        .map(|e| {
            let modified = e
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, e.into_path())
        })
        .collect();

    // Names embed the timestamp, so they break ties within the same mtime
    backups.sort();
    backups.into_iter().map(|(_, p)| p).collect()
}

fn prune_backups(backups: &[PathBuf], keep: usize) -> Result<(), InfrastructureError> {
    if backups.len() <= keep {
        return Ok(());
    }
    for old in &backups[..backups.len() - keep] {
        fs::remove_file(old)?;
        debug!(backup = ?old, "Old backup removed");
    }
    Ok(())
}
