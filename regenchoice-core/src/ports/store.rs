// regenchoice-core/src/ports/store.rs

// What the application needs from persistence: load the question list,
// replace it, and describe where it lives. The JSON file store in
// `infrastructure::store` is the shipped adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::domain::question::Question;
use crate::error::RegenError;

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub questions: Vec<Question>,
    pub count: usize,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    pub count: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub data_dir: PathBuf,
    pub questions_file: PathBuf,
    pub file_exists: bool,
    pub writable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Typed load. A missing store is an empty list.
    async fn load(&self) -> Result<LoadOutcome, RegenError>;

    /// Untyped load, for validating content that may not decode.
    async fn load_raw(&self) -> Result<Vec<Value>, RegenError>;

    /// Replaces the whole list.
    async fn save(&self, questions: &[Question]) -> Result<SaveOutcome, RegenError>;

    async fn info(&self) -> Result<StoreInfo, RegenError>;
}
