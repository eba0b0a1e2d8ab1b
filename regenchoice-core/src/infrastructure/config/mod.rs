pub mod project;

pub use crate::domain::project::{ProjectConfig, StoreConfig, StoreSettings};
pub use project::load_project_config;
