use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Production endpoint of the public meme API
pub const MEME_API_BASE: &str = "https://meme-api.com";

const APP_USER_AGENT: &str = "meme-browser/0.1";

/// One meme as returned by the API. All core fields are required;
/// a response missing any of them fails to parse and is never shown.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MemeRecord {
    pub title: String,
    /// Image location
    pub url: String,
    pub subreddit: String,
    pub author: String,
    /// Canonical URL of the original post
    #[serde(rename = "postLink")]
    pub post_link: String,
    /// Upvote count, not always present
    #[serde(default)]
    pub ups: Option<u64>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub spoiler: bool,
}

impl MemeRecord {
    /// Subreddit badge text, e.g. "r/cats"
    pub fn subreddit_badge(&self) -> String {
        format!("r/{}", self.subreddit)
    }

    /// Attribution line, e.g. "Posted by u/bob"
    pub fn author_line(&self) -> String {
        format!("Posted by u/{}", self.author)
    }

    /// Whether the meme should carry a content warning badge
    pub fn needs_content_warning(&self) -> bool {
        self.nsfw || self.spoiler
    }
}

/// Fetch a random meme from the production API
pub fn fetch_meme() -> ApiResult<MemeRecord> {
    fetch_meme_from(MEME_API_BASE)
}

/// Fetch a random meme from a given API base URL (injectable for tests)
pub fn fetch_meme_from(base_url: &str) -> ApiResult<MemeRecord> {
    let url = format!("{}/gimme", base_url);

    log::info!("Fetching meme from: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("Accept", "application/json")
        .header("User-Agent", APP_USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    Ok(serde_json::from_str::<MemeRecord>(&body)?)
}

/// Async variant of [`fetch_meme_from`], used by the UI background tasks
pub async fn fetch_meme_from_async(base_url: &str) -> ApiResult<MemeRecord> {
    let url = format!("{}/gimme", base_url);

    log::info!("Fetching meme from: {}", url);

    let response = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()?
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status()));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str::<MemeRecord>(&body)?)
}

/// Fetch meme image bytes
pub fn fetch_image(url: &str) -> ApiResult<Vec<u8>> {
    log::debug!("Fetching image: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", APP_USER_AGENT)
        .send()?;

    if response.status().is_success() {
        Ok(response.bytes()?.to_vec())
    } else {
        Err(ApiError::HttpStatus(response.status()))
    }
}

/// Async variant of [`fetch_image`]
pub async fn fetch_image_async(url: &str) -> ApiResult<Vec<u8>> {
    log::debug!("Fetching image: {}", url);

    let response = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()?
        .get(url)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        Err(ApiError::HttpStatus(response.status()))
    }
}

#[cfg(test)]
#[path = "meme_tests.rs"]
mod tests;
