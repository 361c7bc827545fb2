//! `concat-reviews` command handler.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use cosmerge_core::AppConfig;
use cosmerge_pipeline::{concat_review_shards, write_records, ShardKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShardKindArg {
    Preprocessed,
    Raw,
}

impl From<ShardKindArg> for ShardKind {
    fn from(kind: ShardKindArg) -> Self {
        match kind {
            ShardKindArg::Preprocessed => ShardKind::Preprocessed,
            ShardKindArg::Raw => ShardKind::Raw,
        }
    }
}

/// Joins the category's review batches found in `dir`.
///
/// When no batch matches, nothing is written.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed or the output written.
pub(crate) fn run_concat_reviews(
    config: &AppConfig,
    dir: &Path,
    kind: ShardKind,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| default_output(config, kind));

    let joined = concat_review_shards(dir, &config.category, kind)
        .with_context(|| format!("reading review batches from {}", dir.display()))?;

    if joined.files.is_empty() {
        println!(
            "no {kind} review batches for category {} in {}; nothing written",
            config.category,
            dir.display()
        );
        return Ok(());
    }

    write_records(&output, &joined.values)
        .with_context(|| format!("writing reviews to {}", output.display()))?;

    println!(
        "{} records written -> {} ({} files joined, {} skipped)",
        joined.values.len(),
        output.display(),
        joined.files.len(),
        joined.skipped.len()
    );
    Ok(())
}

fn default_output(config: &AppConfig, kind: ShardKind) -> PathBuf {
    let paths = config.paths();
    match kind {
        ShardKind::Preprocessed => paths.reviews,
        ShardKind::Raw => paths.raw_reviews,
    }
}
