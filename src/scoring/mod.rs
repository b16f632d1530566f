//! # Scoring Module
//!
//! Per-comment scoring across three metric families: sentiment, emotion,
//! and writing-level/readability.

mod classifier;
mod emotion;
mod readability;
mod scorer;
mod sentiment;

pub use classifier::{Classification, ScoringError, TextClassifier};
pub use emotion::EmotionLexicon;
pub use readability::{ReadabilityAnalyzer, ReadabilityScores};
pub use scorer::{EmotionScorer, ReadabilityScorer, SentimentScorer};
pub use sentiment::SentimentLexicon;
