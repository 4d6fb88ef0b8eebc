//! HTTP client for the remote validation and dashboard endpoints.

use reqwest::StatusCode;

use crate::config::ApiConfig;
use crate::dashboard::DashboardOutput;
use crate::error::{BoardError, BoardResult};
use crate::query::screen_query;
use crate::validator::{ValidationRequest, ValidationResponse};

/// Header carrying the API key on dashboard requests.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(serde::Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

/// Client for both remote endpoints.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl DashboardClient {
    pub fn new(config: ApiConfig) -> BoardResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Ask the validation endpoint whether `key` is accepted.
    ///
    /// Only a 200 carrying `authorized: true` counts. A 401 is a plain
    /// `false`; other statuses are errors.
    pub async fn validate_key(&self, key: &str) -> BoardResult<bool> {
        let response = self
            .http
            .post(&self.config.validation_url)
            .json(&ValidationRequest {
                x_api_key: Some(key.to_string()),
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::UNAUTHORIZED {
            return Err(BoardError::Status {
                status: status.as_u16(),
                endpoint: self.config.validation_url.clone(),
            });
        }

        let text = response.text().await?;
        let body: ValidationResponse =
            serde_json::from_str(&text).map_err(|e| BoardError::Payload(e.to_string()))?;
        let authorized = status == StatusCode::OK && body.authorized;
        tracing::info!(authorized, "API key validation: {}", body.message);
        Ok(authorized)
    }

    /// One dashboard request, no retry.
    pub async fn request_dashboard(&self, query: &str, key: &str) -> BoardResult<DashboardOutput> {
        let response = self
            .http
            .post(&self.config.dashboard_url)
            .header(API_KEY_HEADER, key)
            .json(&QueryBody { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status {
                status: status.as_u16(),
                endpoint: self.config.dashboard_url.clone(),
            });
        }

        DashboardOutput::from_response(&response.text().await?)
    }

    /// Screen the query, then request a dashboard with linear retry.
    ///
    /// Retries on transport, status and payload errors and on output with
    /// neither HTML nor a URL, up to `max_attempts` in total with a fixed
    /// delay between attempts. `on_response` sees every parsed response,
    /// including empty ones.
    pub async fn generate<F>(
        &self,
        query: &str,
        key: &str,
        mut on_response: F,
    ) -> BoardResult<DashboardOutput>
    where
        F: FnMut(&DashboardOutput),
    {
        // Screening only gates the request; the query is sent as typed.
        screen_query(query)?;
        if key.is_empty() {
            return Err(BoardError::MissingKey);
        }

        let attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let result = match self.request_dashboard(query, key).await {
                Ok(output) => {
                    on_response(&output);
                    if output.is_empty() {
                        Err(BoardError::EmptyDashboard)
                    } else {
                        Ok(output)
                    }
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(output) => {
                    tracing::info!(
                        attempt,
                        has_html = output.html().is_some(),
                        has_url = output.url().is_some(),
                        "Dashboard generated"
                    );
                    return Ok(output);
                }
                Err(e) if e.is_retryable() && attempt < attempts => {
                    tracing::warn!("Dashboard attempt {} failed: {}. Retrying...", attempt, e);
                    tokio::time::sleep(self.config.retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("Dashboard request failed after {} attempt(s): {}", attempt, e);
                    return Err(e);
                }
            }
        }
    }
}
