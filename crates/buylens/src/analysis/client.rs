//! HTTP client for the remote analysis service.
//!
//! Exactly one POST per invocation, no retries. Transport failures are
//! logged for the operator and converted into a `Failure` result; they are
//! never surfaced to the caller as errors.

use std::time::Duration;

use log::{debug, error};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::config::Settings;
use crate::error::ClientError;
use crate::sanitize::redact_url;

use super::response::{
    classify_payload, AnalysisResponse, AnalysisResult, SERVICE_FAILURE_MESSAGE,
    TRANSPORT_FAILURE_MESSAGE,
};

/// Request body for the analysis endpoint.
#[derive(Debug, Clone, Serialize)]
struct AnalysisRequest<'a> {
    url: &'a str,
}

/// Client for the `/analyze_url` endpoint of the analysis service.
pub struct AnalysisClient {
    client: Client,
    endpoint: Url,
}

impl AnalysisClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let endpoint =
            Url::parse(&settings.endpoint).map_err(|e| ClientError::InvalidEndpoint {
                url: settings.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(ClientError::CreateClient)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues the analysis request for `page_url` and normalizes the
    /// response. Always produces a terminal result; never returns an error.
    #[tracing::instrument(skip_all)]
    pub async fn analyze(&self, page_url: &str) -> AnalysisResult {
        debug!("Requesting analysis for {}", redact_url(page_url));

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&AnalysisRequest { url: page_url })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Analysis request failed: {}", e);
                return AnalysisResult::Failure {
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                };
            }
        };

        // The service reports problems in the body, not the status line, so
        // the body is read and classified regardless of status.
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read analysis response ({}): {}", status, e);
                return AnalysisResult::Failure {
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                };
            }
        };

        let payload: AnalysisResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Analysis response ({}) was not valid JSON: {}", status, e);
                return AnalysisResult::Failure {
                    message: SERVICE_FAILURE_MESSAGE.to_string(),
                };
            }
        };

        classify_payload(payload)
    }
}
