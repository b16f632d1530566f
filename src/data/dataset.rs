//! # Dataset
//!
//! Post records and dataset persistence. A dataset is a JSON array of
//! post records; each record carries the post identifier, its ordered
//! comments, and, once analyzed, its per-post statistics.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::stats::Statistics;

/// Errors that can occur when loading, saving, or merging datasets
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read or write dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One post: identifier, ordered comments, optional statistics
///
/// The JSON field names match the dataset files this tool has always
/// produced and consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// Stable unique identifier, a URL or id
    #[serde(rename = "URL")]
    pub url: String,
    /// Ordered comment bodies; may be empty
    #[serde(rename = "COMMENTS", default)]
    pub comments: Vec<String>,
    /// Per-post statistics, attached after analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

impl PostRecord {
    /// Create a record with no comments and no statistics
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            comments: Vec::new(),
            statistics: None,
        }
    }

    /// Set the comments
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}

/// An ordered collection of post records
///
/// Serializes as a bare JSON array, which is the on-disk dataset format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    /// Posts in input order
    pub posts: Vec<PostRecord>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the dataset holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Load a dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        debug!(
            path = %path.as_ref().display(),
            posts = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Save the dataset as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let raw = serde_json::to_vec_pretty(self)?;
        fs::write(path.as_ref(), raw)?;
        debug!(
            path = %path.as_ref().display(),
            posts = self.len(),
            "saved dataset"
        );
        Ok(())
    }

    /// Merge several JSON files into one dataset, in file order
    ///
    /// A file holding an array contributes its records in order; a file
    /// holding a single object contributes that one record.
    pub fn merge<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DatasetError> {
        let mut merged = Dataset::new();

        for path in paths {
            let raw = fs::read_to_string(path.as_ref())?;
            let value: Value = serde_json::from_str(&raw)?;
            match value {
                Value::Array(_) => {
                    let mut records: Vec<PostRecord> = serde_json::from_value(value)?;
                    merged.posts.append(&mut records);
                }
                _ => {
                    let record: PostRecord = serde_json::from_value(value)?;
                    merged.posts.push(record);
                }
            }
        }

        info!(
            files = paths.len(),
            posts = merged.len(),
            "merged dataset files"
        );
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let record = PostRecord::new("https://example.com/post/1")
            .with_comments(vec!["hello".to_string()]);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("URL").is_some());
        assert!(json.get("COMMENTS").is_some());
        // statistics is omitted until analysis attaches it
        assert!(json.get("statistics").is_none());
    }

    #[test]
    fn test_missing_comments_defaults_to_empty() {
        let record: PostRecord =
            serde_json::from_str(r#"{"URL": "https://example.com/p"}"#).unwrap();
        assert!(record.comments.is_empty());
        assert!(record.statistics.is_none());
    }

    #[test]
    fn test_merge_mixes_arrays_and_single_objects() {
        let dir = tempfile::tempdir().unwrap();

        let list_path = dir.path().join("list.json");
        fs::write(
            &list_path,
            r#"[{"URL": "a", "COMMENTS": ["one"]}, {"URL": "b", "COMMENTS": []}]"#,
        )
        .unwrap();

        let object_path = dir.path().join("object.json");
        fs::write(&object_path, r#"{"URL": "c", "COMMENTS": ["two"]}"#).unwrap();

        let merged = Dataset::merge(&[&list_path, &object_path]).unwrap();
        assert_eq!(merged.len(), 3);
        let urls: Vec<&str> = merged.posts.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dataset_roundtrip() {
        let dataset = Dataset {
            posts: vec![
                PostRecord::new("a").with_comments(vec!["one".to_string()]),
                PostRecord::new("b"),
            ],
        };
        let raw = serde_json::to_string(&dataset).unwrap();
        assert!(raw.starts_with('['), "dataset must serialize as an array");

        let back: Dataset = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.posts[0].url, "a");
        assert_eq!(back.posts[0].comments, vec!["one"]);
    }
}
