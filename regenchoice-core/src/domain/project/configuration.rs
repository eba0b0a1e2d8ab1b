// src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::domain::question::language::is_valid_language_code;

pub const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_BACKUP_KEEP: usize = 5;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Language of newly created questions.
    #[serde(rename = "default-language", default = "default_language")]
    #[validate(custom(function = "validate_language_code"))]
    pub default_language: String,

    #[serde(default)]
    #[validate(nested)]
    pub store: StoreConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_language: default_language(),
            store: StoreConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct StoreConfig {
    #[serde(rename = "data-dir", default = "default_data_dir")]
    #[validate(length(min = 1, message = "data-dir cannot be empty"))]
    pub data_dir: String,

    #[serde(rename = "questions-file", default = "default_questions_file")]
    #[validate(custom(function = "validate_file_name"))]
    pub questions_file: String,

    #[serde(rename = "max-payload-bytes", default = "default_max_payload_bytes")]
    #[validate(range(min = 1, message = "max-payload-bytes must be at least 1"))]
    pub max_payload_bytes: u64,

    #[serde(rename = "backup-keep", default = "default_backup_keep")]
    #[validate(range(min = 1, max = 50, message = "backup-keep must be between 1 and 50"))]
    pub backup_keep: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            questions_file: default_questions_file(),
            max_payload_bytes: default_max_payload_bytes(),
            backup_keep: default_backup_keep(),
        }
    }
}

impl StoreConfig {
    /// Resolves relative paths against the project directory.
    pub fn resolve(&self, project_dir: &Path) -> StoreSettings {
        let data_dir = project_dir.join(&self.data_dir);
        StoreSettings {
            questions_file: data_dir.join(&self.questions_file),
            data_dir,
            max_payload_bytes: self.max_payload_bytes,
            backup_keep: self.backup_keep,
        }
    }
}

/// Store configuration with absolute (or project-relative) paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub data_dir: PathBuf,
    pub questions_file: PathBuf,
    pub max_payload_bytes: u64,
    pub backup_keep: usize,
}

fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if is_valid_language_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("language_code")
            .with_message("default-language must be 2 to 10 lowercase letters".into()))
    }
}

fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        Err(ValidationError::new("file_name")
            .with_message("questions-file must be a plain file name".into()))
    } else {
        Ok(())
    }
}

fn default_name() -> String {
    "regenchoice-questions".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_questions_file() -> String {
    "questions.json".to_string()
}
fn default_max_payload_bytes() -> u64 {
    DEFAULT_MAX_PAYLOAD_BYTES
}
fn default_backup_keep() -> usize {
    DEFAULT_BACKUP_KEEP
}
