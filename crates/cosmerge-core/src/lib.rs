//! Shared data model and configuration for the cosmerge pipeline.

pub mod app_config;
pub mod config;
pub mod records;

pub use app_config::{AppConfig, ArtifactPaths};
pub use config::load_app_config_from_env;
pub use records::{MergedRecord, ProductRecord, ReviewRecord, ThumbColor, SINGLE_ITEM};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
