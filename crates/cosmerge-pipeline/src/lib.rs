//! Cleanup and merge stages for scraped cosmetics listings and reviews.
//!
//! Stages run in order: [`normalize`] cleans raw labels, [`matcher`] attaches
//! review bodies to product variants, [`thumb`] widens swatch references
//! across variants that share a label token, and [`dedup`] drops repeated
//! variants. [`merge`] composes the last three over files on disk.

pub mod dedup;
pub mod documents;
pub mod error;
pub mod io;
pub mod matcher;
pub mod merge;
pub mod normalize;
pub mod shards;
pub mod thumb;

pub use dedup::{dedup_by_identity, Deduplicated, Identity, IdentityKey};
pub use documents::{build_documents, split_text, ChunkConfig, ReviewDocument};
pub use error::PipelineError;
pub use io::{read_records, write_records};
pub use matcher::{attach_reviews, labels_match};
pub use merge::{merge, merge_files, MergeOutcome};
pub use normalize::{
    clean_code_name, clean_product_name, extract_price_from_code_name, preprocess_products,
    preprocess_reviews,
};
pub use shards::{concat_review_shards, ShardConcat, ShardKind};
pub use thumb::aggregate_thumb_colors;
