// regenchoice-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(regenchoice::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- QUESTION FILES / JSON ---
    #[error("JSON Error: {0}")]
    #[diagnostic(
        code(regenchoice::infra::json),
        help("The file must hold a JSON array of questions.")
    )]
    Json(#[from] serde_json::Error),

    #[error("{0} must contain an array of questions")]
    #[diagnostic(code(regenchoice::infra::not_an_array))]
    NotAnArray(String),

    #[error("Payload too large: {bytes} bytes (limit {limit})")]
    #[diagnostic(
        code(regenchoice::infra::payload_too_large),
        help("Raise `store.max-payload-bytes` in regenchoice.yaml or split the question bank.")
    )]
    PayloadTooLarge { bytes: usize, limit: u64 },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(regenchoice::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration in '{path}': {reason}")]
    #[diagnostic(code(regenchoice::infra::config_invalid))]
    InvalidConfig { path: String, reason: String },
}
