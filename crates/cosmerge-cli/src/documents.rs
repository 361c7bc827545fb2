//! `documents` command handler.

use std::path::PathBuf;

use anyhow::Context;
use cosmerge_core::{AppConfig, MergedRecord};
use cosmerge_pipeline::{build_documents, read_records, write_records, ChunkConfig};

/// Resolves chunk sizing from CLI overrides, falling back to the config.
///
/// # Errors
///
/// Returns an error if the size is zero or the overlap is not smaller than
/// the size.
pub(crate) fn chunk_config(
    config: &AppConfig,
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
) -> anyhow::Result<ChunkConfig> {
    let size = chunk_size.unwrap_or(config.chunk_size);
    let overlap = chunk_overlap.unwrap_or(config.chunk_overlap);
    if size == 0 {
        anyhow::bail!("--chunk-size must be greater than zero");
    }
    if overlap >= size {
        anyhow::bail!("--chunk-overlap ({overlap}) must be smaller than --chunk-size ({size})");
    }
    Ok(ChunkConfig { size, overlap })
}

/// Chunks every review text of the merged file into retrieval documents.
///
/// # Errors
///
/// Returns an error if the chunk sizing is invalid, the merged file cannot
/// be loaded, or the output cannot be written.
pub(crate) fn run_documents(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
) -> anyhow::Result<()> {
    let chunking = chunk_config(config, chunk_size, chunk_overlap)?;
    let paths = config.paths();
    let input = input.unwrap_or(paths.merged);
    let output = output.unwrap_or(paths.documents);

    let records: Vec<MergedRecord> = read_records(&input)
        .with_context(|| format!("loading merged records from {}", input.display()))?;
    let documents = build_documents(&records, chunking);
    write_records(&output, &documents)
        .with_context(|| format!("writing documents to {}", output.display()))?;

    tracing::info!(
        records = records.len(),
        documents = documents.len(),
        chunk_size = chunking.size,
        chunk_overlap = chunking.overlap,
        "exported retrieval documents"
    );
    println!("{} records written -> {}", documents.len(), output.display());
    Ok(())
}
