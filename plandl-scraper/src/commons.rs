//! Wikimedia Commons image search and download.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Per-item scrape failures.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited (HTTP 429)")]
    RateLimited,

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("search result has no image URL")]
    MissingUrl,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A located image and its credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundImage {
    pub url: String,
    pub attribution: Option<String>,
}

/// Where images come from. Implemented over HTTP by [`CommonsClient`].
#[async_trait]
pub trait ImageSource {
    /// Best image for `term`, or `None` when the search is empty.
    async fn find_image(&self, term: &str) -> Result<Option<FoundImage>, ScrapeError>;

    /// Save the image at `url` to `dest`, removing partial output on error.
    async fn download(&self, url: &str, dest: &Path) -> Result<(), ScrapeError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    pages: HashMap<String, SearchPage>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    index: u32,
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: Option<String>,
    thumburl: Option<String>,
    #[serde(default)]
    extmetadata: HashMap<String, MetadataField>,
}

#[derive(Debug, Deserialize)]
struct MetadataField {
    value: serde_json::Value,
}

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid space regex"));

fn metadata_text(info: &ImageInfo, key: &str) -> Option<String> {
    let raw = info.extmetadata.get(key)?.value.as_str()?;
    let stripped = HTML_TAG.replace_all(raw, " ");
    let text = WHITESPACE.replace_all(stripped.trim(), " ").into_owned();
    (!text.is_empty()).then_some(text)
}

/// Credit line built from the `Artist` and `LicenseShortName` metadata.
fn attribution(info: &ImageInfo) -> Option<String> {
    match (
        metadata_text(info, "Artist"),
        metadata_text(info, "LicenseShortName"),
    ) {
        (Some(artist), Some(license)) => Some(format!("{artist}, {license}")),
        (artist, license) => artist.or(license),
    }
}

fn pick_image(response: SearchResponse) -> Result<Option<FoundImage>, ScrapeError> {
    let Some(query) = response.query else {
        return Ok(None);
    };
    let Some(page) = query.pages.into_values().min_by_key(|p| p.index) else {
        return Ok(None);
    };
    let Some(info) = page.imageinfo.into_iter().next() else {
        return Ok(None);
    };
    let attribution = attribution(&info);
    let url = info
        .thumburl
        .or(info.url)
        .ok_or(ScrapeError::MissingUrl)?;
    Ok(Some(FoundImage { url, attribution }))
}

/// HTTP client for the Commons `api.php` endpoint.
#[derive(Debug, Clone)]
pub struct CommonsClient {
    endpoint: String,
    client: Client,
}

impl CommonsClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ScrapeError> {
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(ScrapeError::RateLimited),
            status if status.is_success() => Ok(response),
            status => Err(ScrapeError::Status(status)),
        }
    }

    async fn stream_to(&self, url: &str, dest: &Path) -> Result<(), ScrapeError> {
        let response = self.client.get(url).send().await?;
        let mut response = Self::check_status(response)?;
        let mut file = tokio::fs::File::create(dest).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ImageSource for CommonsClient {
    async fn find_image(&self, term: &str) -> Result<Option<FoundImage>, ScrapeError> {
        let search = format!("{term} aircraft");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("generator", "search"),
                ("gsrnamespace", "6"),
                ("gsrsearch", search.as_str()),
                ("gsrlimit", "1"),
                ("prop", "imageinfo"),
                ("iiprop", "url|extmetadata"),
                ("iiurlwidth", "1280"),
            ])
            .send()
            .await?;
        let body: SearchResponse = Self::check_status(response)?.json().await?;
        pick_image(body)
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<(), ScrapeError> {
        let result = self.stream_to(url, dest).await;
        if result.is_err() && tokio::fs::try_exists(dest).await.unwrap_or(false) {
            if let Err(err) = tokio::fs::remove_file(dest).await {
                log::warn!("could not remove partial file {}: {err}", dest.display());
            }
        }
        result
    }
}
