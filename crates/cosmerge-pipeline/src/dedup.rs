//! First-seen-wins deduplication over record identity keys.

use std::collections::HashSet;

use cosmerge_core::{MergedRecord, ProductRecord, ReviewRecord};

/// Identity of a record for duplicate detection. Components a record type
/// does not carry are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub brand_name: String,
    pub product_name: String,
    pub code_name: String,
    pub review_name: String,
}

/// Records that can be deduplicated by [`dedup_by_identity`].
pub trait Identity {
    fn identity_key(&self) -> IdentityKey;
}

impl Identity for ProductRecord {
    fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            brand_name: self.brand_name.clone(),
            product_name: self.product_name.clone(),
            code_name: self.code_name.clone(),
            review_name: String::new(),
        }
    }
}

impl Identity for ReviewRecord {
    fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            brand_name: self.brand_name.clone(),
            product_name: self.product_name.clone(),
            code_name: String::new(),
            review_name: self.review_name.clone(),
        }
    }
}

impl Identity for MergedRecord {
    fn identity_key(&self) -> IdentityKey {
        self.product.identity_key()
    }
}

/// Output of [`dedup_by_identity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Deduplicated<T> {
    /// First occurrence of every key, in input order.
    pub records: Vec<T>,
    /// How many later occurrences were discarded.
    pub dropped: usize,
}

/// Keeps the first record for each identity key and discards the rest.
///
/// Relative order of kept records is preserved. Dropped records are not
/// merged into the kept one; each is logged with its key fields.
pub fn dedup_by_identity<T, I>(records: I) -> Deduplicated<T>
where
    T: Identity,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<IdentityKey> = HashSet::new();
    let mut kept = Vec::new();
    let mut dropped = 0usize;

    for record in records {
        let key = record.identity_key();
        if seen.contains(&key) {
            tracing::info!(
                brand = %key.brand_name,
                product = %key.product_name,
                code = %key.code_name,
                review = %key.review_name,
                "dropped duplicate record"
            );
            dropped += 1;
        } else {
            seen.insert(key);
            kept.push(record);
        }
    }

    Deduplicated {
        records: kept,
        dropped,
    }
}
