//! `merge` command handler.

use std::path::PathBuf;

use anyhow::Context;
use cosmerge_core::AppConfig;

/// Merges the preprocessed product and review files into the merged file.
///
/// Paths left unset fall back to the category's artifact paths.
///
/// # Errors
///
/// Returns an error if either input cannot be loaded or the output written.
pub(crate) fn run_merge(
    config: &AppConfig,
    products: Option<PathBuf>,
    reviews: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = config.paths();
    let products = products.unwrap_or(paths.products);
    let reviews = reviews.unwrap_or(paths.reviews);
    let output = output.unwrap_or(paths.merged);

    let outcome = cosmerge_pipeline::merge_files(&products, &reviews, &output).with_context(
        || {
            format!(
                "merging {} with {}",
                products.display(),
                reviews.display()
            )
        },
    )?;

    println!(
        "{} records written -> {} ({} with reviews, {} swatch lists widened, {} duplicates dropped)",
        outcome.records.len(),
        output.display(),
        outcome.with_reviews,
        outcome.swatches_widened,
        outcome.duplicates_dropped
    );
    Ok(())
}
