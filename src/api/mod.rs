//! # API Module
//!
//! Reddit acquisition client.

mod reddit;

pub use reddit::{RedditClient, RedditError, TimeRange};
