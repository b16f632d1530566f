//! # Classification Capability
//!
//! The interface between scorers and the underlying text classification
//! capability, plus the shared label-and-confidence record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during scoring
#[derive(Error, Debug)]
pub enum ScoringError {
    /// The classification capability is not loaded or failed on this input.
    /// Aborts the whole batch: a comment scored for one metric family and
    /// not another would leave the post's statistics with missing keys.
    #[error("classification unavailable: {0}")]
    Unavailable(String),
}

/// A discrete label with a confidence score in [0, 1]
///
/// The label vocabulary is fixed by the classifier that produced the
/// record, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Most likely label for the input text
    pub label: String,
    /// Confidence in the label, in [0, 1]
    pub confidence: f64,
}

impl Classification {
    /// Create a new classification record
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// A loaded text classification capability
///
/// Implementations are expensive to construct and read-only afterward;
/// they are shared behind an `Arc` and injected into scorers at
/// construction so tests can substitute deterministic stubs. `classify`
/// returns the single most likely label, not the full distribution.
pub trait TextClassifier: Send + Sync {
    /// Classify one text, returning the most likely label and confidence
    fn classify(&self, text: &str) -> Result<Classification, ScoringError>;
}
