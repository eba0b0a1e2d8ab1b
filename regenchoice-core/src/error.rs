// regenchoice-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum RegenError {
    // --- DOMAIN ERRORS (factory preconditions, blocked saves) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Shortcuts so `?` works on raw io / json calls
impl From<std::io::Error> for RegenError {
    fn from(err: std::io::Error) -> Self {
        RegenError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<serde_json::Error> for RegenError {
    fn from(err: serde_json::Error) -> Self {
        RegenError::Infrastructure(InfrastructureError::Json(err))
    }
}
