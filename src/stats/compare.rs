//! # Dataset Comparison
//!
//! Pairs two dataset rollups into a side-by-side comparison table after
//! checking that they share the same metric schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{CategoryRollup, DatasetStatistics};

/// Errors that can occur during comparison
#[derive(Error, Debug)]
pub enum CompareError {
    /// The two datasets were not produced with the same scorer set and
    /// cannot be compared meaningfully.
    #[error(
        "datasets expose different metric categories \
         (only in first: {only_first:?}, only in second: {only_second:?})"
    )]
    SchemaMismatch {
        only_first: Vec<String>,
        only_second: Vec<String>,
    },
}

/// One category's rollups from both datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Rollup from the first dataset
    pub file1: CategoryRollup,
    /// Rollup from the second dataset
    pub file2: CategoryRollup,
}

/// Side-by-side comparison: metric category to paired rollups
pub type ComparisonTable = BTreeMap<String, ComparisonEntry>;

/// Pairs two dataset rollups sharing the same metric schema
pub struct Comparator;

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator {
    /// Create a new comparator
    pub fn new() -> Self {
        Self
    }

    /// Build the comparison table
    ///
    /// Pure pairing; no numeric recomputation beyond copying the
    /// entries. Fails when the category key sets differ.
    pub fn compare(
        &self,
        first: &DatasetStatistics,
        second: &DatasetStatistics,
    ) -> Result<ComparisonTable, CompareError> {
        let only_first: Vec<String> = first
            .keys()
            .filter(|k| !second.contains_key(*k))
            .cloned()
            .collect();
        let only_second: Vec<String> = second
            .keys()
            .filter(|k| !first.contains_key(*k))
            .cloned()
            .collect();

        if !only_first.is_empty() || !only_second.is_empty() {
            return Err(CompareError::SchemaMismatch {
                only_first,
                only_second,
            });
        }

        let table = first
            .iter()
            .filter_map(|(category, rollup)| {
                second.get(category).map(|other| {
                    (
                        category.clone(),
                        ComparisonEntry {
                            file1: rollup.clone(),
                            file2: other.clone(),
                        },
                    )
                })
            })
            .collect();

        Ok(table)
    }
}
