// regenchoice-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["regenchoice_project_conf.yaml", "regenchoice.yaml"];

// --- LOADER ---

/// Loads the project configuration. A project without a config file runs
/// on defaults; a config file that exists must parse and validate.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    load_with_env(project_dir, |key| std::env::var(key).ok())
}

fn load_with_env<F>(project_dir: &Path, env: F) -> Result<ProjectConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project config");
            let content = fs::read_to_string(&config_path)?;
            let config: ProjectConfig = serde_yaml::from_str(&content)?;
            config
        }
        None => {
            info!(dir = ?project_dir, "No project config found, using defaults");
            ProjectConfig::default()
        }
    };

    // Layering: env overrides win over the file
    apply_env_overrides(&mut config, env);

    config
        .validate()
        .map_err(|e| InfrastructureError::InvalidConfig {
            path: project_dir.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    // REGENCHOICE_DATA_DIR=/srv/questions regenchoice list
    if let Some(val) = env("REGENCHOICE_DATA_DIR") {
        info!(old = ?config.store.data_dir, new = ?val, "Overriding data dir via ENV");
        config.store.data_dir = val;
    }
    if let Some(val) = env("REGENCHOICE_DEFAULT_LANGUAGE") {
        info!(old = ?config.default_language, new = ?val, "Overriding default language via ENV");
        config.default_language = val;
    }
}
