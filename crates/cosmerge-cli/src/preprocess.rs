//! `preprocess` command handlers.

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use cosmerge_core::{AppConfig, ProductRecord, ReviewRecord};
use cosmerge_pipeline::{preprocess_products, preprocess_reviews, read_records, write_records};

/// Sub-commands available under `preprocess`.
#[derive(Debug, Subcommand)]
pub enum PreprocessCommands {
    /// Clean product names, option labels and prices
    Products {
        /// Raw product file (defaults to the category's raw product file)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Cleaned output file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Clean product names and option labels of review blocks
    Reviews {
        /// Raw review file (defaults to the category's raw review file)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Cleaned output file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Cleans the raw product file and writes the deduplicated result.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output written.
pub(crate) fn run_preprocess_products(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = config.paths();
    let input = input.unwrap_or(paths.raw_products);
    let output = output.unwrap_or(paths.products);

    let raw: Vec<ProductRecord> = read_records(&input)
        .with_context(|| format!("loading products from {}", input.display()))?;
    let total = raw.len();
    let cleaned = preprocess_products(raw);
    write_records(&output, &cleaned.records)
        .with_context(|| format!("writing products to {}", output.display()))?;

    tracing::info!(total, dropped = cleaned.dropped, "preprocessed products");
    println!(
        "{} records written -> {} ({} duplicates dropped)",
        cleaned.records.len(),
        output.display(),
        cleaned.dropped
    );
    Ok(())
}

/// Cleans the raw review file and writes the deduplicated result.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output written.
pub(crate) fn run_preprocess_reviews(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = config.paths();
    let input = input.unwrap_or(paths.raw_reviews);
    let output = output.unwrap_or(paths.reviews);

    let raw: Vec<ReviewRecord> = read_records(&input)
        .with_context(|| format!("loading reviews from {}", input.display()))?;
    let total = raw.len();
    let cleaned = preprocess_reviews(raw);
    write_records(&output, &cleaned.records)
        .with_context(|| format!("writing reviews to {}", output.display()))?;

    tracing::info!(total, dropped = cleaned.dropped, "preprocessed reviews");
    println!(
        "{} records written -> {} ({} duplicates dropped)",
        cleaned.records.len(),
        output.display(),
        cleaned.dropped
    );
    Ok(())
}
