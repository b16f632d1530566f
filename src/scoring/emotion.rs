//! # Emotion Lexicon
//!
//! Keyword-set emotion classifier over six basic emotions.

use std::collections::HashSet;

use super::classifier::{Classification, ScoringError, TextClassifier};

/// Label returned when no emotion keyword matches
pub const NEUTRAL: &str = "neutral";

/// Fixed label order; ties in hit counts resolve to the earlier label
const LABELS: [&str; 6] = ["sadness", "joy", "love", "anger", "fear", "surprise"];

/// Keyword-based emotion classifier
///
/// One keyword set per emotion; the winning label is the one with the
/// most keyword hits in the text.
pub struct EmotionLexicon {
    /// Keyword sets, in the same order as `LABELS`
    keywords: Vec<HashSet<String>>,
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionLexicon {
    /// Create a new emotion lexicon with the default keyword sets
    pub fn new() -> Self {
        let sets: [&[&str]; 6] = [
            // sadness
            &[
                "sad", "unhappy", "depressed", "depressing", "miserable",
                "crying", "cried", "cry", "tears", "grief", "heartbroken",
                "lonely", "hopeless", "disappointed", "disappointing",
                "gloomy", "mourning", "sorrow", "regret",
            ],
            // joy
            &[
                "happy", "joy", "glad", "delighted", "excited", "thrilled",
                "fun", "wonderful", "fantastic", "cheerful", "enjoying",
                "enjoyed", "celebrate", "celebrating", "laughing", "laugh",
                "hilarious", "great", "awesome", "amazing",
            ],
            // love
            &[
                "love", "loved", "loving", "adore", "adored", "cherish",
                "sweet", "caring", "affection", "darling", "devoted",
                "fond", "heartwarming", "precious", "beloved",
            ],
            // anger
            &[
                "angry", "furious", "mad", "rage", "raging", "outraged",
                "annoyed", "annoying", "irritated", "irritating", "hate",
                "hated", "hateful", "hostile", "resent", "infuriating",
                "livid", "pissed", "frustrated", "frustrating",
            ],
            // fear
            &[
                "afraid", "scared", "scary", "terrified", "terrifying",
                "fear", "frightened", "frightening", "anxious", "anxiety",
                "worried", "worrying", "nervous", "panic", "dread",
                "horrified", "horrifying", "alarming", "creepy",
            ],
            // surprise
            &[
                "surprised", "surprising", "shocked", "shocking",
                "astonished", "amazed", "unexpected", "unbelievable",
                "stunned", "startled", "sudden", "whoa", "wow",
                "incredible", "speechless",
            ],
        ];

        let keywords = sets
            .iter()
            .map(|words| words.iter().map(|w| w.to_string()).collect())
            .collect();

        Self { keywords }
    }

    /// The fixed label vocabulary, excluding the neutral fallback
    pub fn labels() -> &'static [&'static str] {
        &LABELS
    }

    /// Count keyword hits per label for a text
    fn hit_counts(&self, text: &str) -> ([usize; 6], usize) {
        let mut counts = [0usize; 6];
        let mut total_words = 0usize;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            total_words += 1;

            for (i, set) in self.keywords.iter().enumerate() {
                if set.contains(&word) {
                    counts[i] += 1;
                }
            }
        }

        (counts, total_words)
    }
}

impl TextClassifier for EmotionLexicon {
    fn classify(&self, text: &str) -> Result<Classification, ScoringError> {
        let (counts, total_words) = self.hit_counts(text);
        let total_hits: usize = counts.iter().sum();

        if total_hits == 0 {
            // No emotional signal, including empty text.
            return Ok(Classification::new(NEUTRAL, 0.5));
        }

        let mut winner = 0;
        for (i, &count) in counts.iter().enumerate() {
            if count > counts[winner] {
                winner = i;
            }
        }

        let share = counts[winner] as f64 / total_hits as f64;
        let coverage = (total_hits as f64 / total_words as f64).min(1.0);
        let confidence = (0.3 + 0.5 * share + 0.2 * coverage).min(0.95);

        Ok(Classification::new(LABELS[winner], confidence))
    }
}
