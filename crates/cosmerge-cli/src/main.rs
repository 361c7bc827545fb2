mod documents;
mod merge;
mod preprocess;
mod reviews;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::preprocess::PreprocessCommands;
use crate::reviews::ShardKindArg;

#[derive(Debug, Parser)]
#[command(name = "cosmerge-cli")]
#[command(about = "Clean, merge and export scraped cosmetics listings and reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Clean raw scrape output and drop repeated variants
    Preprocess {
        #[command(subcommand)]
        command: PreprocessCommands,
    },
    /// Attach review texts to product variants and widen swatch lists
    Merge {
        /// Preprocessed product file (defaults to the category's preprocessed file)
        #[arg(long)]
        products: Option<PathBuf>,

        /// Preprocessed review file (defaults to the category's preprocessed review file)
        #[arg(long)]
        reviews: Option<PathBuf>,

        /// Merged output file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Join per-batch review files into one array
    ConcatReviews {
        /// Directory holding the batch files
        #[arg(long)]
        dir: PathBuf,

        /// Which batch files to join
        #[arg(long, value_enum, default_value_t = ShardKindArg::Preprocessed)]
        kind: ShardKindArg,

        /// Joined output file (defaults to the category's review file for `kind`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export merged review texts as chunked retrieval documents
    Documents {
        /// Merged input file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Document output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Maximum chunk length in characters (overrides COSMERGE_CHUNK_SIZE)
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Characters shared between chunks (overrides COSMERGE_CHUNK_OVERLAP)
        #[arg(long)]
        chunk_overlap: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = cosmerge_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Preprocess { command }) => match command {
            PreprocessCommands::Products { input, output } => {
                preprocess::run_preprocess_products(&config, input, output)?;
            }
            PreprocessCommands::Reviews { input, output } => {
                preprocess::run_preprocess_reviews(&config, input, output)?;
            }
        },
        Some(Commands::Merge {
            products,
            reviews,
            output,
        }) => merge::run_merge(&config, products, reviews, output)?,
        Some(Commands::ConcatReviews { dir, kind, output }) => {
            reviews::run_concat_reviews(&config, &dir, kind.into(), output)?;
        }
        Some(Commands::Documents {
            input,
            output,
            chunk_size,
            chunk_overlap,
        }) => documents::run_documents(&config, input, output, chunk_size, chunk_overlap)?,
        None => println!(
            "cosmerge-cli ready (category {}, data dir {}); see --help",
            config.category,
            config.data_dir.display()
        ),
    }

    Ok(())
}
