use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_dir, Path::new("./data"));
    assert_eq!(cfg.category, "lip_makeup");
    assert_eq!(cfg.chunk_size, 700);
    assert_eq!(cfg.chunk_overlap, 50);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("COSMERGE_LOG_LEVEL", "debug");
    map.insert("COSMERGE_DATA_DIR", "/srv/cosmerge");
    map.insert("COSMERGE_CATEGORY", "cushion");
    map.insert("COSMERGE_CHUNK_SIZE", "500");
    map.insert("COSMERGE_CHUNK_OVERLAP", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.data_dir, Path::new("/srv/cosmerge"));
    assert_eq!(cfg.category, "cushion");
    assert_eq!(cfg.chunk_size, 500);
    assert_eq!(cfg.chunk_overlap, 20);
    assert_eq!(
        cfg.paths().merged,
        Path::new("/srv/cosmerge/oliveyoung_cushion_merged.json")
    );
}

#[test]
fn build_app_config_rejects_non_numeric_chunk_size() {
    let mut map = HashMap::new();
    map.insert("COSMERGE_CHUNK_SIZE", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COSMERGE_CHUNK_SIZE"),
        "expected InvalidEnvVar(COSMERGE_CHUNK_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_chunk_size() {
    let mut map = HashMap::new();
    map.insert("COSMERGE_CHUNK_SIZE", "0");
    map.insert("COSMERGE_CHUNK_OVERLAP", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COSMERGE_CHUNK_SIZE"),
        "expected InvalidEnvVar(COSMERGE_CHUNK_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_overlap_not_smaller_than_chunk() {
    let mut map = HashMap::new();
    map.insert("COSMERGE_CHUNK_SIZE", "100");
    map.insert("COSMERGE_CHUNK_OVERLAP", "100");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COSMERGE_CHUNK_OVERLAP"),
        "expected InvalidEnvVar(COSMERGE_CHUNK_OVERLAP), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_category() {
    let mut map = HashMap::new();
    map.insert("COSMERGE_CATEGORY", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COSMERGE_CATEGORY"),
        "expected InvalidEnvVar(COSMERGE_CATEGORY), got: {result:?}"
    );
}
