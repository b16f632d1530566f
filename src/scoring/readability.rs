//! # Readability Metrics
//!
//! Writing-level analysis: Flesch reading ease, Flesch-Kincaid grade,
//! Gunning fog, SMOG index, and lexical diversity.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Named readability sub-metrics for one text
///
/// Each sub-metric is independently scaled; there is no shared range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// Flesch reading ease (higher = easier to read)
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level (U.S. school grade)
    pub flesch_kincaid_grade: f64,
    /// Gunning fog index (years of education to understand)
    pub gunning_fog: f64,
    /// SMOG index (years of education to understand)
    pub smog_index: f64,
    /// Unique words / total words, 0 for empty text
    pub lexical_diversity: f64,
}

impl ReadabilityScores {
    /// Sub-metric names paired with their values, in fixed order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("flesch_reading_ease", self.flesch_reading_ease),
            ("flesch_kincaid_grade", self.flesch_kincaid_grade),
            ("gunning_fog", self.gunning_fog),
            ("smog_index", self.smog_index),
            ("lexical_diversity", self.lexical_diversity),
        ]
    }
}

/// Readability analyzer
///
/// Pure text computation; no external capability involved. Sentence
/// count is floored at 1 for the ratio-based formulas, so empty text
/// evaluates to the formulas' zero-ratio values instead of NaN.
pub struct ReadabilityAnalyzer {
    /// Sentence terminator runs
    sentence_splitter: Regex,
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadabilityAnalyzer {
    /// Create a new readability analyzer
    pub fn new() -> Self {
        Self {
            sentence_splitter: Regex::new(r"[.!?]+").unwrap(),
        }
    }

    /// Compute all readability sub-metrics for a text
    pub fn analyze(&self, text: &str) -> ReadabilityScores {
        let normalized: String = text.nfc().collect();

        // Lexical diversity works on raw whitespace tokens: unique / total.
        let raw_tokens: Vec<&str> = normalized.split_whitespace().collect();
        let lexical_diversity = if raw_tokens.is_empty() {
            0.0
        } else {
            let unique: std::collections::HashSet<&str> =
                raw_tokens.iter().copied().collect();
            unique.len() as f64 / raw_tokens.len() as f64
        };

        let words: Vec<String> = raw_tokens
            .iter()
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let sentence_count = self
            .sentence_splitter
            .split(&normalized)
            .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
            .count()
            .max(1) as f64;

        let word_count = words.len() as f64;
        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();
        let complex_count = words.iter().filter(|w| count_syllables(w) >= 3).count();

        let (words_per_sentence, syllables_per_word, complex_ratio) = if words.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                word_count / sentence_count,
                syllable_count as f64 / word_count,
                complex_count as f64 / word_count,
            )
        };

        let flesch_reading_ease =
            206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let flesch_kincaid_grade =
            0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
        let gunning_fog = 0.4 * (words_per_sentence + 100.0 * complex_ratio);
        let smog_index =
            1.0430 * (complex_count as f64 * 30.0 / sentence_count).sqrt() + 3.1291;

        ReadabilityScores {
            flesch_reading_ease,
            flesch_kincaid_grade,
            gunning_fog,
            smog_index,
            lexical_diversity,
        }
    }
}

/// Count syllables in a word with a vowel-group heuristic
///
/// Counts runs of vowels (y included), drops a trailing silent `e`
/// outside `-le` endings, floors at one syllable per non-empty word.
fn count_syllables(word: &str) -> usize {
    let w: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if w.is_empty() {
        return 0;
    }

    const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
    let mut count = 0;
    let mut prev_vowel = false;
    for c in w.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = is_vowel;
    }

    if w.ends_with('e') && !w.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}
