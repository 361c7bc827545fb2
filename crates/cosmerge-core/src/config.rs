use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables already in the process.
///
/// This does NOT load `.env` files; the binary calls `dotenvy::dotenv()` first.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("COSMERGE_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("COSMERGE_DATA_DIR", "./data"));

    let category = or_default("COSMERGE_CATEGORY", "lip_makeup");
    if category.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "COSMERGE_CATEGORY".to_string(),
            reason: "category must not be empty".to_string(),
        });
    }

    let chunk_size = parse_usize("COSMERGE_CHUNK_SIZE", "700")?;
    if chunk_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "COSMERGE_CHUNK_SIZE".to_string(),
            reason: "chunk size must be greater than zero".to_string(),
        });
    }

    let chunk_overlap = parse_usize("COSMERGE_CHUNK_OVERLAP", "50")?;
    if chunk_overlap >= chunk_size {
        return Err(ConfigError::InvalidEnvVar {
            var: "COSMERGE_CHUNK_OVERLAP".to_string(),
            reason: format!("overlap {chunk_overlap} must be smaller than chunk size {chunk_size}"),
        });
    }

    Ok(AppConfig {
        log_level,
        data_dir,
        category,
        chunk_size,
        chunk_overlap,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
