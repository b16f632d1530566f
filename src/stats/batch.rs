//! # Comment Batch Processing
//!
//! Runs every scorer over one post's comments and reduces the collected
//! per-category scores into summary statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::{
    Classification, EmotionScorer, ReadabilityScorer, ReadabilityScores,
    ScoringError, SentimentScorer,
};

use super::summary::SummaryStats;

/// Metric category for sentiment confidence scores
pub const SENTIMENT_CATEGORY: &str = "sentiment";
/// Metric category for emotion confidence scores
pub const EMOTION_CATEGORY: &str = "emotion";

/// Per-post statistics: metric category to summary stats
///
/// Every post with at least one comment and the same scorer set carries
/// the identical key set; only a post with zero comments yields an empty
/// map.
pub type Statistics = BTreeMap<String, SummaryStats>;

/// All scores for a single comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentScores {
    /// The comment text
    pub text: String,
    /// Sentiment label and confidence
    pub sentiment: Classification,
    /// Emotion label and confidence
    pub emotion: Classification,
    /// Writing-level sub-metrics
    pub readability: ReadabilityScores,
}

/// Result of processing one post's comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Per-comment records, in input order
    pub per_comment: Vec<CommentScores>,
    /// Summary statistics per metric category; empty iff the input was
    /// empty
    pub overall: Statistics,
}

/// Runs the full fixed scorer set over a post's comments
///
/// Always invokes every scorer exactly once per comment, in a fixed
/// order (sentiment, emotion, readability), so every non-empty post
/// produces the same statistics key set. The sentiment and emotion
/// categories contribute the confidence value to statistics, not the
/// label.
pub struct CommentBatchProcessor {
    sentiment: SentimentScorer,
    emotion: EmotionScorer,
    readability: ReadabilityScorer,
}

impl Default for CommentBatchProcessor {
    fn default() -> Self {
        Self::with_default_scorers()
    }
}

impl CommentBatchProcessor {
    /// Create a processor from explicit scorers
    pub fn new(
        sentiment: SentimentScorer,
        emotion: EmotionScorer,
        readability: ReadabilityScorer,
    ) -> Self {
        Self {
            sentiment,
            emotion,
            readability,
        }
    }

    /// Create a processor backed by the built-in lexicons
    pub fn with_default_scorers() -> Self {
        Self::new(
            SentimentScorer::with_default_lexicon(),
            EmotionScorer::with_default_lexicon(),
            ReadabilityScorer::new(),
        )
    }

    /// Score every comment and summarize per metric category
    ///
    /// Any scorer failure aborts the whole post with no partial output;
    /// a post scored for one metric family but not another would leave
    /// its statistics with missing categories.
    pub fn process(&self, comments: &[String]) -> Result<BatchOutput, ScoringError> {
        let mut per_comment = Vec::with_capacity(comments.len());
        let mut by_category: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for comment in comments {
            let sentiment = self.sentiment.score(comment)?;
            let emotion = self.emotion.score(comment)?;
            let readability = self.readability.score(comment);

            by_category
                .entry(SENTIMENT_CATEGORY.to_string())
                .or_default()
                .push(sentiment.confidence);
            by_category
                .entry(EMOTION_CATEGORY.to_string())
                .or_default()
                .push(emotion.confidence);
            for (name, value) in readability.entries() {
                by_category.entry(name.to_string()).or_default().push(value);
            }

            per_comment.push(CommentScores {
                text: comment.clone(),
                sentiment,
                emotion,
                readability,
            });
        }

        let mut overall = Statistics::new();
        for (category, values) in by_category {
            if let Some(stats) = SummaryStats::from_values(&values) {
                overall.insert(category, stats);
            }
        }

        debug!(
            comments = comments.len(),
            categories = overall.len(),
            "processed comment batch"
        );

        Ok(BatchOutput {
            per_comment,
            overall,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::scoring::TextClassifier;

    const EPS: f64 = 1e-9;

    struct ScriptedClassifier {
        confidences: Vec<f64>,
        calls: std::sync::Mutex<usize>,
    }

    impl ScriptedClassifier {
        fn new(confidences: Vec<f64>) -> Self {
            Self {
                confidences,
                calls: std::sync::Mutex::new(0),
            }
        }
    }

    impl TextClassifier for ScriptedClassifier {
        fn classify(&self, _text: &str) -> Result<Classification, ScoringError> {
            let mut calls = self.calls.lock().unwrap();
            let confidence = self.confidences[*calls % self.confidences.len()];
            *calls += 1;
            Ok(Classification::new("POSITIVE", confidence))
        }
    }

    struct BrokenClassifier;

    impl TextClassifier for BrokenClassifier {
        fn classify(&self, _text: &str) -> Result<Classification, ScoringError> {
            Err(ScoringError::Unavailable("stubbed outage".to_string()))
        }
    }

    fn comments(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_input_gives_empty_statistics() {
        let processor = CommentBatchProcessor::with_default_scorers();
        let output = processor.process(&[]).unwrap();
        assert!(output.per_comment.is_empty());
        assert!(output.overall.is_empty());
    }

    #[test]
    fn test_all_categories_present_for_nonempty_input() {
        let processor = CommentBatchProcessor::with_default_scorers();
        let output = processor.process(&comments(&["great show", "meh"])).unwrap();

        let keys: Vec<&str> = output.overall.keys().map(|k| k.as_str()).collect();
        for expected in [
            "emotion",
            "flesch_kincaid_grade",
            "flesch_reading_ease",
            "gunning_fog",
            "lexical_diversity",
            "sentiment",
            "smog_index",
        ] {
            assert!(keys.contains(&expected), "missing category {expected}");
        }
        assert_eq!(keys.len(), 7);
        assert_eq!(output.per_comment.len(), 2);
    }

    #[test]
    fn test_confidence_feeds_statistics() {
        let processor = CommentBatchProcessor::new(
            SentimentScorer::new(Arc::new(ScriptedClassifier::new(vec![0.9, 0.8]))),
            EmotionScorer::new(Arc::new(ScriptedClassifier::new(vec![0.6]))),
            ReadabilityScorer::new(),
        );

        let output = processor.process(&comments(&["great", "bad"])).unwrap();
        let sentiment = &output.overall[SENTIMENT_CATEGORY];
        assert!((sentiment.mean - 0.85).abs() < EPS);
        assert!((sentiment.median - 0.85).abs() < EPS);
        assert!((sentiment.std - 0.05).abs() < EPS);

        let emotion = &output.overall[EMOTION_CATEGORY];
        assert!((emotion.mean - 0.6).abs() < EPS);
    }

    #[test]
    fn test_scorer_failure_aborts_post() {
        let processor = CommentBatchProcessor::new(
            SentimentScorer::with_default_lexicon(),
            EmotionScorer::new(Arc::new(BrokenClassifier)),
            ReadabilityScorer::new(),
        );
        let result = processor.process(&comments(&["fine", "fine too"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_per_comment_preserves_input_order() {
        let processor = CommentBatchProcessor::with_default_scorers();
        let input = comments(&["first comment", "second comment", "third comment"]);
        let output = processor.process(&input).unwrap();
        let texts: Vec<&str> = output.per_comment.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first comment", "second comment", "third comment"]);
    }
}
