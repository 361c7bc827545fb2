use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub data_dir: PathBuf,
    /// Category slug used in artifact file names, e.g. `"lip_makeup"`.
    pub category: String,
    /// Maximum retrieval chunk length, in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive retrieval chunks.
    pub chunk_overlap: usize,
}

impl AppConfig {
    /// Default artifact locations for the configured category.
    #[must_use]
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.data_dir, &self.category)
    }
}

/// File locations shared by the pipeline stages.
///
/// Every stage reads the previous stage's output from here unless the CLI
/// overrides the path explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub raw_products: PathBuf,
    pub products: PathBuf,
    pub raw_reviews: PathBuf,
    pub reviews: PathBuf,
    pub merged: PathBuf,
    pub documents: PathBuf,
}

impl ArtifactPaths {
    #[must_use]
    pub fn new(data_dir: &Path, category: &str) -> Self {
        let file = |suffix: &str| data_dir.join(format!("oliveyoung_{category}{suffix}.json"));
        Self {
            raw_products: file(""),
            products: file("_preprocessed"),
            raw_reviews: file("_reviews_raw"),
            reviews: file("_reviews_preprocessed"),
            merged: file("_merged"),
            documents: file("_documents"),
        }
    }
}
