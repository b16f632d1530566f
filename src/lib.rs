//! # Comment Analytics
//!
//! Scores free-text comments for sentiment, emotion, and
//! writing-level/readability, and aggregates the per-comment scores into
//! per-post, per-dataset, and cross-dataset statistics with
//! best/worst-post provenance.
//!
//! ## Modules
//!
//! - `api` - Reddit client for post listings and comment extraction
//! - `data` - Dataset records, persistence, and comment cleaning
//! - `scoring` - Sentiment, emotion, and readability scorers
//! - `stats` - Batch processing, dataset rollups, and comparison
//! - `report` - Console rendering of rollups and comparison tables
//!
//! ## Example Usage
//!
//! ```
//! use comment_analytics::{CommentBatchProcessor, DatasetAggregator, PostRecord};
//!
//! let processor = CommentBatchProcessor::with_default_scorers();
//!
//! let mut post = PostRecord::new("https://example.com/post/1").with_comments(vec![
//!     "I love this show!".to_string(),
//!     "Terrible writing, really disappointing.".to_string(),
//! ]);
//! let output = processor.process(&post.comments)?;
//! post.statistics = Some(output.overall);
//!
//! let rollups = DatasetAggregator::new().aggregate(&[post])?;
//! assert!(rollups.contains_key("sentiment"));
//! assert!(rollups.contains_key("flesch_reading_ease"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod data;
pub mod report;
pub mod scoring;
pub mod stats;

// Re-exports for convenience
pub use api::{RedditClient, RedditError, TimeRange};
pub use data::{CommentCleaner, Dataset, DatasetError, PostRecord};
pub use scoring::{
    Classification, EmotionLexicon, EmotionScorer, ReadabilityAnalyzer,
    ReadabilityScorer, ReadabilityScores, ScoringError, SentimentLexicon,
    SentimentScorer, TextClassifier,
};
pub use stats::{
    AggregateError, BatchOutput, CategoryRollup, CommentBatchProcessor,
    CommentScores, Comparator, CompareError, ComparisonEntry, ComparisonTable,
    DatasetAggregator, DatasetStatistics, PostExtreme, Statistics, SummaryStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
