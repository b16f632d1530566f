//! Comment Analytics CLI
//!
//! Fetches subreddit comment datasets, scores them, and compares the
//! resulting statistics.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use comment_analytics::{
    report, CommentBatchProcessor, Comparator, Dataset, DatasetAggregator,
    DatasetStatistics, RedditClient, TimeRange,
};

#[derive(Parser)]
#[command(name = "comment-analytics", version)]
#[command(about = "Sentiment, emotion, and readability statistics for comment datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a subreddit's top posts and their comments into a dataset
    Fetch {
        /// Subreddit name, without the r/ prefix
        #[arg(short, long)]
        subreddit: String,

        /// Number of listing pages to fetch (50 posts per page)
        #[arg(long, default_value_t = 5)]
        pages: usize,

        /// Time range for the top listing (all, day, week, month, year, hour)
        #[arg(long, default_value = "all")]
        range: String,

        /// Output dataset file
        #[arg(short, long, default_value = "dataset.json")]
        output: PathBuf,
    },

    /// Merge several dataset JSON files into one
    Merge {
        /// Input dataset files, merged in argument order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output dataset file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Attach per-post statistics to every post in a dataset
    Analyze {
        /// Input dataset file
        input: PathBuf,

        /// Output dataset file with statistics attached
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Roll per-post statistics up into dataset statistics
    Summarize {
        /// Analyzed dataset file
        input: PathBuf,

        /// Optional output file for the rollup JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two dataset statistics files
    Compare {
        /// First rollup file
        file1: PathBuf,

        /// Second rollup file
        file2: PathBuf,

        /// Display label for the first dataset
        #[arg(long, default_value = "file1")]
        label1: String,

        /// Display label for the second dataset
        #[arg(long, default_value = "file2")]
        label2: String,

        /// Optional output file for the comparison JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_rollups(path: &PathBuf) -> Result<DatasetStatistics> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading statistics file {}", path.display()))?;
    let rollups = serde_json::from_str(&raw)
        .with_context(|| format!("parsing statistics file {}", path.display()))?;
    Ok(rollups)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch {
            subreddit,
            pages,
            range,
            output,
        } => {
            let range: TimeRange = range.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let client = RedditClient::new()?;
            let dataset = client.fetch_dataset(&subreddit, pages, range).await?;
            dataset.save(&output)?;
            info!(
                subreddit = %subreddit,
                posts = dataset.len(),
                output = %output.display(),
                "dataset written"
            );
        }

        Command::Merge { inputs, output } => {
            let merged = Dataset::merge(&inputs)?;
            merged.save(&output)?;
            info!(
                files = inputs.len(),
                posts = merged.len(),
                output = %output.display(),
                "merged dataset written"
            );
        }

        Command::Analyze { input, output } => {
            let mut dataset = Dataset::load(&input)?;
            let processor = CommentBatchProcessor::with_default_scorers();

            for (index, post) in dataset.posts.iter_mut().enumerate() {
                let batch = processor
                    .process(&post.comments)
                    .with_context(|| format!("scoring post {} ({})", index, post.url))?;
                post.statistics = Some(batch.overall);
            }

            dataset.save(&output)?;
            info!(
                posts = dataset.len(),
                output = %output.display(),
                "analyzed dataset written"
            );
        }

        Command::Summarize { input, output } => {
            let dataset = Dataset::load(&input)?;
            let rollups = DatasetAggregator::new().aggregate(&dataset.posts)?;

            print!("{}", report::render_dataset_statistics(&rollups));

            if let Some(path) = output {
                fs::write(&path, serde_json::to_vec_pretty(&rollups)?)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(output = %path.display(), "statistics summary written");
            }
        }

        Command::Compare {
            file1,
            file2,
            label1,
            label2,
            output,
        } => {
            let first = load_rollups(&file1)?;
            let second = load_rollups(&file2)?;
            let table = Comparator::new().compare(&first, &second)?;

            print!("{}", report::render_comparison(&table, &label1, &label2));

            if let Some(path) = output {
                fs::write(&path, serde_json::to_vec_pretty(&table)?)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(output = %path.display(), "comparison table written");
            }
        }
    }

    Ok(())
}
