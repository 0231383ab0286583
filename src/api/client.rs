use async_trait::async_trait;
use reqwest::Client;

use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::model::ResultRecord;

/// Source of detection results.
///
/// The UI only talks to this trait; `PlateClient` is the HTTP
/// implementation and tests substitute scripted sources.
#[async_trait]
pub trait PlateSource: Send + Sync {
    /// Fetch one freshly generated detection result.
    async fn fetch_new_plate(&self) -> Result<ResultRecord, FetchError>;
}

/// HTTP client for `GET {base_url}/api/new-plate`.
pub struct PlateClient {
    client: Client,
    url: String,
}

impl PlateClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.new_plate_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PlateSource for PlateClient {
    async fn fetch_new_plate(&self) -> Result<ResultRecord, FetchError> {
        tracing::debug!(url = %self.url, "Requesting new plate");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { source })?;

        let record =
            ResultRecord::from_json(&body).map_err(|source| FetchError::Decode { source })?;
        tracing::debug!(
            image_filename = %record.image_filename,
            plates = record.plates.len(),
            "Decoded plate response"
        );
        Ok(record)
    }
}
