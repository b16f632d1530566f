//! # Scorers
//!
//! One scorer per metric family. The sentiment and emotion scorers wrap
//! an injected classification capability; the readability scorer is pure
//! computation.

use std::sync::Arc;

use super::classifier::{Classification, ScoringError, TextClassifier};
use super::emotion::EmotionLexicon;
use super::readability::{ReadabilityAnalyzer, ReadabilityScores};
use super::sentiment::SentimentLexicon;

/// Sentiment scorer over an injected classification capability
pub struct SentimentScorer {
    classifier: Arc<dyn TextClassifier>,
}

impl SentimentScorer {
    /// Create a sentiment scorer backed by the given capability
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Create a sentiment scorer backed by the built-in lexicon
    pub fn with_default_lexicon() -> Self {
        Self::new(Arc::new(SentimentLexicon::new()))
    }

    /// Score one text
    pub fn score(&self, text: &str) -> Result<Classification, ScoringError> {
        self.classifier.classify(text)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::with_default_lexicon()
    }
}

/// Emotion scorer over an injected classification capability
pub struct EmotionScorer {
    classifier: Arc<dyn TextClassifier>,
}

impl EmotionScorer {
    /// Create an emotion scorer backed by the given capability
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Create an emotion scorer backed by the built-in lexicon
    pub fn with_default_lexicon() -> Self {
        Self::new(Arc::new(EmotionLexicon::new()))
    }

    /// Score one text
    pub fn score(&self, text: &str) -> Result<Classification, ScoringError> {
        self.classifier.classify(text)
    }
}

impl Default for EmotionScorer {
    fn default() -> Self {
        Self::with_default_lexicon()
    }
}

/// Writing-level scorer
pub struct ReadabilityScorer {
    analyzer: ReadabilityAnalyzer,
}

impl ReadabilityScorer {
    /// Create a new readability scorer
    pub fn new() -> Self {
        Self {
            analyzer: ReadabilityAnalyzer::new(),
        }
    }

    /// Score one text; readability never needs an external capability
    pub fn score(&self, text: &str) -> ReadabilityScores {
        self.analyzer.analyze(text)
    }
}

impl Default for ReadabilityScorer {
    fn default() -> Self {
        Self::new()
    }
}
