//! Retrieval documents built from the merged corpus.
//!
//! Each review text is cut into overlapping character windows and wrapped
//! in a block naming the brand, product, shade and price, which is the
//! shape the downstream similarity index expects.

use cosmerge_core::MergedRecord;
use serde::{Deserialize, Serialize};

/// Window sizing for [`split_text`], in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    pub size: usize,
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size: 700,
            overlap: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub content: String,
    pub product_url: String,
    /// Position of this chunk within its review text.
    pub review_index: usize,
}

/// Splits `text` into windows of at most `config.size` characters, with
/// `config.overlap` characters repeated between neighbours.
///
/// A window that would cut through the text ends at its last whitespace
/// instead, provided that whitespace lies beyond the overlap region.
/// Chunks are trimmed and empty chunks are dropped.
#[must_use]
pub fn split_text(text: &str, config: ChunkConfig) -> Vec<String> {
    let size = config.size.max(1);
    let overlap = config.overlap.min(size - 1);
    let chars: Vec<char> = text.chars().collect();

    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < chars.len() {
        let hard_end = (start + size).min(chars.len());
        let end = if hard_end < chars.len() {
            (start + overlap + 1..hard_end)
                .rev()
                .find(|&i| chars[i].is_whitespace())
                .unwrap_or(hard_end)
        } else {
            hard_end
        };

        let chunk: String = chars[start..end].iter().collect();
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_owned());
        }

        if end >= chars.len() {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }
    chunks
}

/// Builds one document per chunk of every non-empty review text.
#[must_use]
pub fn build_documents(records: &[MergedRecord], config: ChunkConfig) -> Vec<ReviewDocument> {
    let mut documents = Vec::new();
    for record in records {
        let product = &record.product;
        for text in record.texts.iter().filter(|t| !t.trim().is_empty()) {
            for (review_index, chunk) in split_text(text, config).into_iter().enumerate() {
                documents.push(ReviewDocument {
                    content: format!(
                        "브랜드: {}\n제품명: {}\n색상명: {}\n가격: {}\n리뷰:\n{}",
                        product.brand_name,
                        product.product_name,
                        product.code_name,
                        product.price,
                        chunk
                    ),
                    product_url: product.product_url.clone(),
                    review_index,
                });
            }
        }
    }
    tracing::debug!(records = records.len(), documents = documents.len(), "built documents");
    documents
}
