//! # Statistics Module
//!
//! The hierarchical statistics pipeline: per-post batch processing,
//! dataset-wide aggregation with provenance, and cross-dataset
//! comparison.

mod aggregate;
mod batch;
mod compare;
mod summary;

pub use aggregate::{
    AggregateError, CategoryRollup, DatasetAggregator, DatasetStatistics,
    PostExtreme,
};
pub use batch::{
    BatchOutput, CommentBatchProcessor, CommentScores, Statistics,
    EMOTION_CATEGORY, SENTIMENT_CATEGORY,
};
pub use compare::{Comparator, CompareError, ComparisonEntry, ComparisonTable};
pub use summary::SummaryStats;
