//! # Reddit API Client
//!
//! Client for listing a subreddit's top posts and extracting the
//! flattened comment bodies of a post from its JSON comment tree.

use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::data::{CommentCleaner, Dataset, PostRecord};

/// Reddit base URL
const REDDIT_BASE_URL: &str = "https://old.reddit.com";

/// Rate limit delay between requests (milliseconds)
const RATE_LIMIT_DELAY_MS: u64 = 1000;

/// Posts per listing page
const POSTS_PER_PAGE: usize = 50;

/// User agent for Reddit requests
const USER_AGENT: &str = "Mozilla/5.0";

/// Errors that can occur when talking to Reddit
#[derive(Error, Debug)]
pub enum RedditError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Time range for top-post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    All,
    Day,
    Week,
    Month,
    Year,
    Hour,
}

impl TimeRange {
    /// Convert the range to the listing query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::Hour => "hour",
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TimeRange::All),
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            "hour" => Ok(TimeRange::Hour),
            other => Err(format!("unknown time range: {other}")),
        }
    }
}

/// Reddit client with rate limiting
pub struct RedditClient {
    /// HTTP client
    http: Client,
    /// Delay between consecutive requests
    delay: Duration,
    /// Cleaner applied to every extracted comment body
    cleaner: CommentCleaner,
}

impl RedditClient {
    /// Create a new client with the default rate-limit delay
    pub fn new() -> Result<Self, RedditError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            delay: Duration::from_millis(RATE_LIMIT_DELAY_MS),
            cleaner: CommentCleaner::new(),
        })
    }

    /// Override the inter-request delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, RedditError> {
        debug!(url, "requesting");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RedditError::HttpStatus(status.as_u16()));
        }
        Ok(response.json::<Value>().await?)
    }

    /// List URLs of a subreddit's top posts
    ///
    /// Pages through the listing with the `after` cursor and stops early
    /// when the cursor runs out.
    pub async fn top_post_urls(
        &self,
        subreddit: &str,
        pages: usize,
        range: TimeRange,
    ) -> Result<Vec<String>, RedditError> {
        let listing_url = format!("{REDDIT_BASE_URL}/r/{subreddit}/top.json");
        let mut urls = Vec::new();
        let mut after: Option<String> = None;

        for page in 0..pages {
            let mut query = vec![
                ("limit", POSTS_PER_PAGE.to_string()),
                ("t", range.as_str().to_string()),
            ];
            if let Some(cursor) = &after {
                query.push(("after", cursor.clone()));
            }

            let listing = self.get_json(&listing_url, &query).await?;
            let children = listing["data"]["children"].as_array().ok_or_else(|| {
                RedditError::InvalidResponse("listing has no children array".to_string())
            })?;

            for post in children {
                if let Some(permalink) = post["data"]["permalink"].as_str() {
                    urls.push(format!("{REDDIT_BASE_URL}{permalink}"));
                }
            }

            after = listing["data"]["after"].as_str().map(str::to_string);
            if after.is_none() {
                debug!(page = page + 1, "no more listing pages");
                break;
            }
            sleep(self.delay).await;
        }

        Ok(urls)
    }

    /// Fetch the flattened comment bodies of one post
    ///
    /// Walks the comment tree depth-first in encounter order; `more`
    /// continuation stubs are skipped, not expanded.
    pub async fn post_comments(&self, post_url: &str) -> Result<Vec<String>, RedditError> {
        let json_url = format!("{}.json", post_url.trim_end_matches('/'));
        let page = self.get_json(&json_url, &[]).await?;

        let children = page[1]["data"]["children"].as_array().ok_or_else(|| {
            RedditError::InvalidResponse("post page has no comment listing".to_string())
        })?;

        let mut comments = Vec::new();
        self.collect_comments(children, &mut comments);
        Ok(comments)
    }

    /// Recursively collect cleaned comment bodies from a comment forest
    pub(crate) fn collect_comments(&self, nodes: &[Value], out: &mut Vec<String>) {
        for node in nodes {
            // 'more' nodes are placeholders for unexpanded comments
            if node["kind"].as_str() == Some("more") {
                continue;
            }

            if let Some(body) = node["data"]["body"].as_str() {
                out.push(self.cleaner.clean(body));
            }

            if let Some(children) = node["data"]["replies"]["data"]["children"].as_array() {
                self.collect_comments(children, out);
            }
        }
    }

    /// Fetch a whole dataset: top posts of a subreddit with their comments
    ///
    /// Posts whose comment page cannot be fetched are skipped with a
    /// warning rather than failing the whole run.
    pub async fn fetch_dataset(
        &self,
        subreddit: &str,
        pages: usize,
        range: TimeRange,
    ) -> Result<Dataset, RedditError> {
        let urls = self.top_post_urls(subreddit, pages, range).await?;
        info!(subreddit, posts = urls.len(), "fetched top-post listing");

        let mut dataset = Dataset::new();
        for url in urls {
            sleep(self.delay).await;
            match self.post_comments(&url).await {
                Ok(comments) => {
                    debug!(%url, comments = comments.len(), "fetched post comments");
                    dataset
                        .posts
                        .push(PostRecord::new(url).with_comments(comments));
                }
                Err(err) => {
                    warn!(%url, error = %err, "skipping post");
                }
            }
        }

        Ok(dataset)
    }
}
