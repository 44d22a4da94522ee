use std::time::Duration;

use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

/// Knobs for the HTTP client. Unset values fall back to reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: Option<u64>,
}

/// Plain GET capability. Anything other than `200 OK` is an error.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn check_len(&self, actual: u64) -> Result<(), FetchError> {
        match self.settings.max_bytes {
            Some(max_bytes) if actual > max_bytes => Err(FetchError::new(
                FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(actual),
                },
                "response too large",
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            self.check_len(content_len)?;
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            self.check_len(bytes.len() as u64 + chunk.len() as u64)?;
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            final_url,
            status: status.as_u16(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput {
            bytes: bytes.freeze(),
            metadata,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
