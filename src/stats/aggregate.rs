//! # Dataset Aggregation
//!
//! Rolls per-post statistics up into dataset-wide statistics per metric
//! category, tracking which post produced each extreme value.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::data::PostRecord;

use super::summary::SummaryStats;

/// Errors that can occur during dataset aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Every post was skipped: nothing in the dataset has scored
    /// comments, so there is nothing to roll up.
    #[error("no post in the dataset has scored comments")]
    EmptyDataset,
}

/// The post responsible for an extreme (min or max) statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostExtreme {
    /// Identifier of the post
    pub url: String,
    /// The extreme per-post mean it contributed
    pub value: f64,
}

/// Dataset-wide rollup for one metric category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRollup {
    /// Mean of the contributing per-post means
    pub average: f64,
    /// Median of the contributing per-post means
    pub median: f64,
    /// Population standard deviation of the contributing per-post means
    pub std: f64,
    /// Smallest contributing per-post mean
    pub min: f64,
    /// Largest contributing per-post mean
    pub max: f64,
    /// Post achieving `max`
    pub best_post: PostExtreme,
    /// Post achieving `min`
    pub worst_post: PostExtreme,
}

/// Dataset statistics: metric category to rollup
pub type DatasetStatistics = BTreeMap<String, CategoryRollup>;

/// Running state for one metric category during a scan
///
/// Built once per aggregation call and discarded afterward. Extremes are
/// updated with strict comparisons only, so the first post seen at an
/// extreme value keeps the provenance on ties.
struct CategoryAccumulator {
    values: Vec<f64>,
    min: f64,
    max: f64,
    min_post: String,
    max_post: String,
}

impl CategoryAccumulator {
    fn first(post: &str, value: f64) -> Self {
        Self {
            values: vec![value],
            min: value,
            max: value,
            min_post: post.to_string(),
            max_post: post.to_string(),
        }
    }

    fn push(&mut self, post: &str, value: f64) {
        self.values.push(value);
        if value < self.min {
            self.min = value;
            self.min_post = post.to_string();
        }
        if value > self.max {
            self.max = value;
            self.max_post = post.to_string();
        }
    }
}

/// Folds per-post statistics into dataset statistics with provenance
///
/// The per-post **mean** is what rolls up; per-post median and std are
/// computed and persisted per post but do not feed the dataset rollup.
pub struct DatasetAggregator;

impl Default for DatasetAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a dataset's posts, scanned in input order
    ///
    /// Posts without statistics, and posts whose statistics map is empty
    /// (zero comments), contribute nothing and are skipped rather than
    /// zero-filled.
    pub fn aggregate(
        &self,
        posts: &[PostRecord],
    ) -> Result<DatasetStatistics, AggregateError> {
        let mut accumulators: BTreeMap<String, CategoryAccumulator> = BTreeMap::new();
        let mut contributing = 0usize;

        for post in posts {
            let stats = match &post.statistics {
                Some(stats) if !stats.is_empty() => stats,
                _ => {
                    debug!(url = %post.url, "skipping post without scored comments");
                    continue;
                }
            };
            contributing += 1;

            for (category, summary) in stats {
                match accumulators.entry(category.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(CategoryAccumulator::first(&post.url, summary.mean));
                    }
                    Entry::Occupied(mut slot) => {
                        slot.get_mut().push(&post.url, summary.mean);
                    }
                }
            }
        }

        if contributing == 0 {
            return Err(AggregateError::EmptyDataset);
        }

        let mut rollups = DatasetStatistics::new();
        for (category, acc) in accumulators {
            if let Some(summary) = SummaryStats::from_values(&acc.values) {
                rollups.insert(
                    category,
                    CategoryRollup {
                        average: summary.mean,
                        median: summary.median,
                        std: summary.std,
                        min: acc.min,
                        max: acc.max,
                        best_post: PostExtreme {
                            url: acc.max_post,
                            value: acc.max,
                        },
                        worst_post: PostExtreme {
                            url: acc.min_post,
                            value: acc.min,
                        },
                    },
                );
            }
        }

        debug!(
            posts = posts.len(),
            contributing,
            categories = rollups.len(),
            "aggregated dataset statistics"
        );

        Ok(rollups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Statistics, SummaryStats};

    const EPS: f64 = 1e-9;

    fn post_with_mean(url: &str, category: &str, mean: f64) -> PostRecord {
        let mut stats = Statistics::new();
        stats.insert(
            category.to_string(),
            SummaryStats {
                mean,
                median: mean,
                std: 0.0,
            },
        );
        PostRecord {
            url: url.to_string(),
            comments: vec!["placeholder".to_string()],
            statistics: Some(stats),
        }
    }

    fn empty_post(url: &str) -> PostRecord {
        PostRecord {
            url: url.to_string(),
            comments: Vec::new(),
            statistics: Some(Statistics::new()),
        }
    }

    #[test]
    fn test_rollup_over_means() {
        let posts = vec![
            post_with_mean("a", "sentiment", 0.85),
            post_with_mean("b", "sentiment", 0.5),
        ];
        let rollups = DatasetAggregator::new().aggregate(&posts).unwrap();
        let sentiment = &rollups["sentiment"];

        assert!((sentiment.average - 0.675).abs() < EPS);
        assert!((sentiment.min - 0.5).abs() < EPS);
        assert!((sentiment.max - 0.85).abs() < EPS);
        assert_eq!(sentiment.best_post.url, "a");
        assert_eq!(sentiment.worst_post.url, "b");
        assert!((sentiment.best_post.value - sentiment.max).abs() < EPS);
        assert!((sentiment.worst_post.value - sentiment.min).abs() < EPS);
    }

    #[test]
    fn test_empty_posts_are_skipped_not_zero_filled() {
        let posts = vec![
            empty_post("empty"),
            post_with_mean("a", "sentiment", 0.4),
            PostRecord {
                url: "unscored".to_string(),
                comments: vec!["text".to_string()],
                statistics: None,
            },
        ];
        let rollups = DatasetAggregator::new().aggregate(&posts).unwrap();
        let sentiment = &rollups["sentiment"];

        assert!((sentiment.min - 0.4).abs() < EPS);
        assert_eq!(sentiment.best_post.url, "a");
        assert_eq!(sentiment.worst_post.url, "a");
    }

    #[test]
    fn test_all_posts_skipped_is_an_error() {
        let posts = vec![empty_post("x"), empty_post("y")];
        let result = DatasetAggregator::new().aggregate(&posts);
        assert!(matches!(result, Err(AggregateError::EmptyDataset)));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = DatasetAggregator::new().aggregate(&[]);
        assert!(matches!(result, Err(AggregateError::EmptyDataset)));
    }

    #[test]
    fn test_tie_break_is_first_seen() {
        let posts = vec![
            post_with_mean("first", "sentiment", 0.7),
            post_with_mean("second", "sentiment", 0.7),
            post_with_mean("third", "sentiment", 0.7),
        ];
        let rollups = DatasetAggregator::new().aggregate(&posts).unwrap();
        let sentiment = &rollups["sentiment"];
        assert_eq!(sentiment.best_post.url, "first");
        assert_eq!(sentiment.worst_post.url, "first");
    }

    #[test]
    fn test_extremes_bound_every_contribution() {
        let means = [3.2, -1.5, 0.0, 7.75, 7.75, -1.5];
        let posts: Vec<PostRecord> = means
            .iter()
            .enumerate()
            .map(|(i, &m)| post_with_mean(&format!("p{i}"), "gunning_fog", m))
            .collect();
        let rollups = DatasetAggregator::new().aggregate(&posts).unwrap();
        let fog = &rollups["gunning_fog"];

        for &m in &means {
            assert!(fog.min <= m && m <= fog.max);
        }
        assert_eq!(fog.best_post.url, "p3");
        assert_eq!(fog.worst_post.url, "p1");
    }
}
