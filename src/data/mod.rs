//! # Data Module
//!
//! Dataset records, persistence, and comment cleaning.

mod dataset;
mod preprocessing;

pub use dataset::{Dataset, DatasetError, PostRecord};
pub use preprocessing::CommentCleaner;
