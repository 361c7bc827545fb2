//! Attaches review bodies to product variants.
//!
//! Products and reviews are grouped by exact `product_name`. Within a group
//! a review block belongs to a variant when either option label contains
//! the other. Containment is deliberately loose: a short label such as
//! `"핑크"` matches every review label that mentions it.

use std::collections::HashMap;

use cosmerge_core::{MergedRecord, ProductRecord, ReviewRecord};

/// Bidirectional containment between a product label and a review label.
///
/// An empty label only matches another empty label.
#[must_use]
pub fn labels_match(code_name: &str, review_name: &str) -> bool {
    if code_name.is_empty() || review_name.is_empty() {
        return code_name.is_empty() && review_name.is_empty();
    }
    review_name.contains(code_name) || code_name.contains(review_name)
}

/// Pairs every product with the texts of all matching review blocks.
///
/// Output is ordered by product-name group (in order of first appearance),
/// then by input order within the group. Texts of matched blocks are
/// concatenated in review-collection order; a product with no match gets
/// an empty `texts` list.
#[must_use]
pub fn attach_reviews(products: Vec<ProductRecord>, reviews: &[ReviewRecord]) -> Vec<MergedRecord> {
    let mut reviews_by_name: HashMap<&str, Vec<&ReviewRecord>> = HashMap::new();
    for review in reviews {
        reviews_by_name
            .entry(review.product_name.as_str())
            .or_default()
            .push(review);
    }

    let mut group_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<ProductRecord>> = Vec::new();
    for product in products {
        let slot = *group_of
            .entry(product.product_name.clone())
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        groups[slot].push(product);
    }

    let mut merged = Vec::new();
    for mut product in groups.into_iter().flatten() {
        let candidates = reviews_by_name
            .get(product.product_name.as_str())
            .map_or(&[][..], Vec::as_slice);

        let texts: Vec<String> = candidates
            .iter()
            .filter(|review| labels_match(&product.code_name, &review.review_name))
            .flat_map(|review| review.texts.iter().cloned())
            .collect();

        // `texts` is owned by the merged record, not the pass-through map.
        product.extra.remove("texts");
        merged.push(MergedRecord { product, texts });
    }

    tracing::debug!(
        products = merged.len(),
        reviews = reviews.len(),
        "attached review texts"
    );
    merged
}
