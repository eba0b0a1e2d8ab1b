pub mod error;
pub mod project;
pub mod question;
pub mod validation;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
