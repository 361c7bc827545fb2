//! Product/review merge orchestration.

use std::path::Path;

use cosmerge_core::{MergedRecord, ProductRecord, ReviewRecord};

use crate::dedup::dedup_by_identity;
use crate::error::PipelineError;
use crate::io::{read_records, write_records};
use crate::matcher::attach_reviews;
use crate::thumb::aggregate_thumb_colors;

/// Result of a merge run with the counters reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub records: Vec<MergedRecord>,
    /// Records that ended up with at least one review text.
    pub with_reviews: usize,
    /// Records whose swatch list was widened by token sharing.
    pub swatches_widened: usize,
    /// Variant rows dropped as duplicates after aggregation.
    pub duplicates_dropped: usize,
}

/// Merges already-normalized products and reviews.
///
/// 1. Attach matching review texts to every product.
/// 2. Widen swatch lists across variants sharing a label token.
/// 3. Drop repeated `(brand, product, code)` variants, first one wins.
///
/// Aggregation runs before deduplication so swatches carried only by a
/// dropped duplicate survive on the kept record.
#[must_use]
pub fn merge(products: Vec<ProductRecord>, reviews: &[ReviewRecord]) -> MergeOutcome {
    let mut merged = attach_reviews(products, reviews);
    let swatches_widened = aggregate_thumb_colors(&mut merged);
    let deduped = dedup_by_identity(merged);

    let with_reviews = deduped
        .records
        .iter()
        .filter(|r| !r.texts.is_empty())
        .count();

    tracing::info!(
        records = deduped.records.len(),
        with_reviews,
        swatches_widened,
        duplicates_dropped = deduped.dropped,
        "merge complete"
    );

    MergeOutcome {
        records: deduped.records,
        with_reviews,
        swatches_widened,
        duplicates_dropped: deduped.dropped,
    }
}

/// Loads both input files, merges them, and writes the merged array.
///
/// Nothing is written unless both inputs load cleanly.
///
/// # Errors
///
/// Returns [`PipelineError`] if either input is missing or malformed, or
/// the output cannot be written.
pub fn merge_files(
    products_path: &Path,
    reviews_path: &Path,
    output_path: &Path,
) -> Result<MergeOutcome, PipelineError> {
    let products: Vec<ProductRecord> = read_records(products_path)?;
    let reviews: Vec<ReviewRecord> = read_records(reviews_path)?;
    let outcome = merge(products, &reviews);
    write_records(output_path, &outcome.records)?;
    Ok(outcome)
}
