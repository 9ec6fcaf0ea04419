//! Verse provider client
//!
//! Fetches a random verse from bible-api.com. The request is bounded by a total
//! timeout and the response body by a byte cap, whatever the server declares.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::core::{Config, FetchError};

/// Decoded API response: two open-ended key/value sections
///
/// `serde_json::Map` iterates keys in sorted order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersePayload {
    #[serde(rename = "translation")]
    pub translation_info: Map<String, Value>,
    #[serde(rename = "random_verse")]
    pub verse_info: Map<String, Value>,
}

/// Source of random verses
#[async_trait]
pub trait VerseProvider: Send + Sync {
    async fn fetch_verse(&self) -> Result<VersePayload, FetchError>;
}

/// HTTP client for the bible-api.com random verse endpoint
#[derive(Clone)]
pub struct BibleApiClient {
    client: reqwest::Client,
    url: String,
    max_body_bytes: usize,
}

impl BibleApiClient {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        max_body_bytes: usize,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("versebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self::with_client(client, url, max_body_bytes))
    }

    /// Use a preconfigured reqwest client; its timeout is the request bound
    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            max_body_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.verse_api_url.clone(),
            config.request_timeout,
            config.max_body_bytes,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Read the body chunk by chunk, failing as soon as it passes the cap
    async fn read_capped(&self, mut response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(FetchError::Request)? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchError::BodyTooLarge {
                    limit: self.max_body_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait]
impl VerseProvider for BibleApiClient {
    async fn fetch_verse(&self) -> Result<VersePayload, FetchError> {
        debug!("Fetching verse from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_body_bytes as u64 {
                return Err(FetchError::BodyTooLarge {
                    limit: self.max_body_bytes,
                });
            }
        }

        let body = self.read_capped(response).await?;
        debug!("Verse response: {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned provider: returns the payload if set, otherwise a 500 status error
    pub struct StubProvider {
        payload: Option<VersePayload>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        pub fn returning(payload: VersePayload) -> Self {
            Self {
                payload: Some(payload),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                payload: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VerseProvider for StubProvider {
        async fn fetch_verse(&self) -> Result<VersePayload, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.payload.clone().ok_or(FetchError::BadStatus(500))
        }
    }
}
