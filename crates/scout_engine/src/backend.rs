use std::time::Duration;

use futures_util::StreamExt;
use reqwest::StatusCode;
use scout_core::Item;
use scout_logging::{scout_debug, scout_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{items_from_records, ItemRecord, UserProfile};
use crate::{BackendError, FailureKind, SearchRequest};

const SEARCH_PATH: &str = "api/projects/search";
const RECOMMENDATIONS_PATH: &str = "api/projects/recommendations";
const PROFILE_PATH: &str = "api/profile";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// The aggregation backend as seen by the client.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Item>, BackendError>;

    async fn recommendations(&self, email: &str) -> Result<Vec<Item>, BackendError>;

    async fn profile(&self, email: &str) -> Result<UserProfile, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        scout_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::new(FailureKind::NotFound, status.to_string()));
        }
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(|err| {
            scout_warn!("Backend sent an undecodable body: {}", err);
            BackendError::new(FailureKind::Decode, err.to_string())
        })
    }

    fn too_large(&self, actual: Option<u64>) -> BackendError {
        BackendError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Item>, BackendError> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &request.query);
            if let Some(source) = request.filter.source.as_param() {
                pairs.append_pair("source", source);
            }
            if let Some(level) = request.filter.level.as_param() {
                pairs.append_pair("level", level);
            }
        }
        let records: Vec<ItemRecord> = self.get_json(url).await?;
        Ok(items_from_records(records))
    }

    async fn recommendations(&self, email: &str) -> Result<Vec<Item>, BackendError> {
        let mut url = self.endpoint(RECOMMENDATIONS_PATH)?;
        url.query_pairs_mut().append_pair("email", email);
        let records: Vec<ItemRecord> = self.get_json(url).await?;
        Ok(items_from_records(records))
    }

    async fn profile(&self, email: &str) -> Result<UserProfile, BackendError> {
        let mut url = self.endpoint(PROFILE_PATH)?;
        url.path_segments_mut()
            .map_err(|_| BackendError::new(FailureKind::InvalidUrl, "base url cannot hold a path"))?
            .push(email);
        self.get_json(url).await
    }
}

/// Parses the configured base url, forcing a trailing slash so endpoint
/// paths are appended rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, BackendError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(BackendError::new(
            FailureKind::InvalidUrl,
            format!("{raw} cannot be used as a base url"),
        ));
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
