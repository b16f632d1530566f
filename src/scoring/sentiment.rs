//! # Sentiment Lexicon
//!
//! Rule-based sentiment classifier over a general-purpose word lexicon,
//! with negation flipping and intensifier scaling.

use std::collections::HashMap;

use super::classifier::{Classification, ScoringError, TextClassifier};

/// Label for non-negative sentiment scores
pub const POSITIVE: &str = "POSITIVE";
/// Label for negative sentiment scores
pub const NEGATIVE: &str = "NEGATIVE";

/// Lexicon-based sentiment classifier
///
/// Holds word-sentiment mappings for everyday comment language. Built
/// once and shared read-only between scoring calls.
pub struct SentimentLexicon {
    /// Word to sentiment score mapping, scores in [-1, 1]
    words: HashMap<String, f64>,
    /// Negation words (flip the sign of the following sentiment word)
    negations: Vec<String>,
    /// Intensifier words (scale the following sentiment word)
    intensifiers: HashMap<String, f64>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    /// Create a new sentiment lexicon with the default word list
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = vec![
            ("love", 0.8),
            ("loved", 0.8),
            ("great", 0.7),
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("excellent", 0.8),
            ("fantastic", 0.8),
            ("wonderful", 0.8),
            ("perfect", 0.7),
            ("best", 0.7),
            ("good", 0.5),
            ("nice", 0.5),
            ("cool", 0.4),
            ("fun", 0.5),
            ("happy", 0.6),
            ("beautiful", 0.6),
            ("brilliant", 0.7),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("helpful", 0.5),
            ("interesting", 0.4),
            ("impressive", 0.6),
            ("agree", 0.3),
            ("thanks", 0.4),
            ("thank", 0.4),
            ("win", 0.4),
            ("better", 0.3),
            ("glad", 0.5),
            ("favorite", 0.6),
            ("recommend", 0.5),
        ];

        let negative_words = vec![
            ("hate", -0.8),
            ("hated", -0.8),
            ("terrible", -0.8),
            ("awful", -0.8),
            ("horrible", -0.8),
            ("worst", -0.8),
            ("bad", -0.5),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("annoying", -0.5),
            ("stupid", -0.6),
            ("boring", -0.5),
            ("ugly", -0.5),
            ("wrong", -0.4),
            ("trash", -0.7),
            ("garbage", -0.7),
            ("broken", -0.5),
            ("useless", -0.6),
            ("unwatchable", -0.8),
            ("sad", -0.5),
            ("angry", -0.5),
            ("disgusting", -0.7),
            ("pathetic", -0.7),
            ("cringe", -0.5),
            ("toxic", -0.6),
            ("mediocre", -0.4),
            ("overrated", -0.5),
            ("worse", -0.4),
            ("ruined", -0.6),
            ("fail", -0.5),
            ("disagree", -0.3),
        ];

        for (word, score) in positive_words {
            words.insert(word.to_string(), score);
        }

        for (word, score) in negative_words {
            words.insert(word.to_string(), score);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "none",
            "cannot", "cant", "don't", "dont", "doesn't", "doesnt", "didn't",
            "didnt", "won't", "wont", "wouldn't", "wouldnt", "shouldn't",
            "shouldnt", "couldn't", "couldnt", "isn't", "isnt", "aren't",
            "arent", "wasn't", "wasnt", "weren't", "werent", "hardly",
            "barely", "scarcely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.5);
        intensifiers.insert("extremely".to_string(), 2.0);
        intensifiers.insert("really".to_string(), 1.4);
        intensifiers.insert("so".to_string(), 1.3);
        intensifiers.insert("absolutely".to_string(), 1.8);
        intensifiers.insert("totally".to_string(), 1.6);
        intensifiers.insert("incredibly".to_string(), 1.8);
        intensifiers.insert("literally".to_string(), 1.3);
        intensifiers.insert("slightly".to_string(), 0.5);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("kinda".to_string(), 0.7);
        intensifiers.insert("pretty".to_string(), 1.2);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get sentiment score for a word
    pub fn word_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier for a word
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add a custom word to the lexicon
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score);
    }

    /// Score a text in [-1, 1]
    ///
    /// 1. Look up word scores
    /// 2. Flip sign for words following a negation
    /// 3. Scale words following an intensifier
    /// 4. Average the matched scores
    fn analyze(&self, text: &str) -> LexiconMatch {
        let mut scores: Vec<f64> = Vec::new();
        let mut total_words = 0usize;

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            total_words += 1;

            if self.is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifier(&word) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.word_score(&word) {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        LexiconMatch {
            score: score.clamp(-1.0, 1.0),
            matched: scores.len(),
            total_words,
        }
    }
}

/// Outcome of a lexicon scan over one text
struct LexiconMatch {
    score: f64,
    matched: usize,
    total_words: usize,
}

impl TextClassifier for SentimentLexicon {
    fn classify(&self, text: &str) -> Result<Classification, ScoringError> {
        let m = self.analyze(text);

        let label = if m.score >= 0.0 { POSITIVE } else { NEGATIVE };

        // Confidence grows with lexicon coverage and score strength,
        // bounded away from 0 and 1. Empty text lands on the floor.
        let coverage = if m.total_words > 0 {
            (m.matched as f64 / m.total_words as f64).min(1.0)
        } else {
            0.0
        };
        let strength = m.score.abs();
        let confidence = (0.3 + 0.4 * coverage + 0.3 * strength).min(0.95);

        Ok(Classification::new(label, confidence))
    }
}
