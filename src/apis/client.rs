/// Base HTTP client shared by the provider adapters
///
/// One request per call, no retries and no rate limiting. The timeout is
/// only set when explicitly configured.
use crate::arguments::is_debug_api_enabled;
use crate::errors::{ApiError, ApiResult};
use crate::logger::{self, LogTag};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Longest body excerpt carried in errors and debug logs
const BODY_PREVIEW_CHARS: usize = 300;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client; `timeout_secs == 0` keeps the transport default (no timeout)
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout(timeout_secs) {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// GET `url` and decode the JSON body
    pub async fn get_json<T>(&self, url: &str, tag: LogTag) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute(self.client.get(url), url, tag).await
    }

    /// POST `body` as JSON to `url` and decode the JSON response
    pub async fn post_json<B, T>(&self, url: &str, body: &B, tag: LogTag) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.client.post(url).json(body), url, tag).await
    }

    async fn execute<T>(&self, request: RequestBuilder, url: &str, tag: LogTag) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            logger::debug(tag.clone(), &format!("{} request failed: {}", url, e));
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if is_debug_api_enabled() {
            logger::debug(
                tag.clone(),
                &format!(
                    "{} -> HTTP {} in {}ms: {}",
                    url,
                    status.as_u16(),
                    start.elapsed().as_millis(),
                    preview(&body)
                ),
            );
        }

        logger::verbose(tag.clone(), &format!("{} response body: {}", url, body));

        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        serde_json::from_str::<T>(&body).map_err(ApiError::from)
    }
}

fn request_timeout(timeout_secs: u64) -> Option<Duration> {
    (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs))
}

fn preview(body: &str) -> String {
    if body.chars().count() <= BODY_PREVIEW_CHARS {
        body.to_string()
    } else {
        let cut: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}
