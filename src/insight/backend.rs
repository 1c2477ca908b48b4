use crate::insight::models::{BusinessData, BusinessRequest, HeadlineResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Why a backend call could not produce a usable payload
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend timed out")]
    Timeout,
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("malformed backend response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("backend returned an empty headline")]
    EmptyHeadline,
}

impl BackendError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Transport(err)
        }
    }

    fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Decode(err)
        }
    }
}

/// Strict client for the insight backend.
///
/// Every failure is returned to the caller; the fallback lives in
/// [`InsightClient`](crate::insight::InsightClient).
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /business-data`
    pub async fn business_data(
        &self,
        request: &BusinessRequest,
    ) -> Result<BusinessData, BackendError> {
        let response = self
            .http
            .post(format!("{}/business-data", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(BackendError::from_send)?;

        decode(response).await
    }

    /// `GET /regenerate-headline?name=..&location=..`
    pub async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<HeadlineResponse, BackendError> {
        let response = self
            .http
            .get(format!("{}/regenerate-headline", self.base_url))
            .query(&[("name", name), ("location", location)])
            .send()
            .await
            .map_err(BackendError::from_send)?;

        let payload: HeadlineResponse = decode(response).await?;
        if payload.headline.trim().is_empty() {
            return Err(BackendError::EmptyHeadline);
        }
        Ok(payload)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }
    response.json::<T>().await.map_err(BackendError::from_body)
}
