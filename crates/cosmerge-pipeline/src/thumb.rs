//! Swatch propagation across variants whose labels share a token.
//!
//! Option dropdowns word the same shade inconsistently (`"라즈베리 핑크"`
//! vs `"핑크 라즈베리"`), so each record's swatch list is widened with the
//! swatches of every record sharing at least one whitespace-delimited token
//! of `code_name`. The union is taken over the swatch lists as they were
//! before the pass: records linked only through an intermediate record do
//! not exchange swatches in a single call.

use std::collections::{BTreeSet, HashMap, HashSet};

use cosmerge_core::{ProductRecord, ThumbColor};

/// Widens every record's `thumb_color` with those of its direct token
/// neighbours. Returns the number of records whose swatch list grew.
pub fn aggregate_thumb_colors<T>(records: &mut [T]) -> usize
where
    T: AsRef<ProductRecord> + AsMut<ProductRecord>,
{
    let mut by_token: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        let mut tokens_seen = HashSet::new();
        for token in record.as_ref().code_name.split_whitespace() {
            if tokens_seen.insert(token) {
                by_token.entry(token.to_owned()).or_default().push(idx);
            }
        }
    }

    let before: Vec<ThumbColor> = records
        .iter()
        .map(|r| r.as_ref().thumb_color.clone())
        .collect();

    let mut widened = 0usize;
    for (idx, record) in records.iter_mut().enumerate() {
        let product = record.as_mut();
        let neighbours: BTreeSet<usize> = product
            .code_name
            .split_whitespace()
            .filter_map(|token| by_token.get(token))
            .flatten()
            .copied()
            .filter(|&other| other != idx)
            .collect();

        let swatches = &mut product.thumb_color;
        let size_before = swatches.len();
        for other in neighbours {
            swatches.union_with(&before[other]);
        }
        if swatches.len() > size_before {
            widened += 1;
        }
    }

    tracing::debug!(records = records.len(), widened, "aggregated thumb colors");
    widened
}
