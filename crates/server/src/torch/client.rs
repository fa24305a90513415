//! HTTP client for the torch `$extract-data` operation and status endpoint

use bridge_core::{BridgeError, OutputEntry, ndjson};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::config::{BasicAuth, Config};

const EXTRACT_PATH: &str = "/fhir/$extract-data";
const STATUS_PREFIX: &str = "/fhir/__status/";

/// Client for the torch extraction service
#[derive(Clone)]
pub struct TorchClient {
    http: reqwest::Client,
    base_url: String,
    auth: Option<BasicAuth>,
}

/// Outcome of submitting an extraction request
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Torch accepted the request; the polling location tracks the job.
    Accepted(String),
    /// Torch answered with a non-accepted status, relayed as a value.
    Rejected(u16),
}

/// Outcome of a single poll against the status endpoint
#[derive(Debug)]
pub enum PollOutcome {
    /// Extraction finished; torch listed the produced result files.
    Complete(Vec<OutputEntry>),
    /// Torch is still working on the request.
    Processing,
    /// Torch reported a failure status.
    Failed(u16),
}

/// Torch client error types
#[derive(Debug, Error)]
pub enum TorchError {
    #[error("request to torch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("torch accepted the request but sent no Content-Location header")]
    MissingContentLocation,

    #[error("result file fetch returned status {status}")]
    ResultFetch { status: u16 },

    #[error(transparent)]
    Results(#[from] BridgeError),
}

/// Body of a completed status response
#[derive(Deserialize)]
struct StatusResponse {
    output: Vec<OutputEntry>,
}

impl TorchClient {
    /// Build a client from the process configuration.
    ///
    /// TLS certificate verification stays on unless the configuration opted
    /// out for self-signed test environments.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()?;
        Ok(Self {
            http,
            base_url: config.torch_base_url.clone(),
            auth: config.basic_auth.clone(),
        })
    }

    /// Submit an assembled request envelope to `$extract-data`.
    ///
    /// An accepted response carries the polling location in its
    /// `Content-Location` header, returned with the status-path prefix
    /// stripped.
    pub async fn submit(&self, envelope: &JsonValue) -> Result<SubmitOutcome, TorchError> {
        let url = format!("{}{}", self.base_url, EXTRACT_PATH);
        let response = self
            .with_auth(self.http.post(&url))
            .header(CONTENT_TYPE, "application/fhir+json")
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201 | 202) {
            tracing::info!(
                status = status.as_u16(),
                "torch did not accept the extraction request"
            );
            return Ok(SubmitOutcome::Rejected(status.as_u16()));
        }

        let location = response
            .headers()
            .get("Content-Location")
            .and_then(|value| value.to_str().ok())
            .ok_or(TorchError::MissingContentLocation)?;
        let location = location.strip_prefix(STATUS_PREFIX).unwrap_or(location);
        Ok(SubmitOutcome::Accepted(location.to_string()))
    }

    /// Query the status endpoint once for a polling location.
    ///
    /// One attempt per call; re-polling is the caller's business.
    pub async fn poll(&self, location: &str) -> Result<PollOutcome, TorchError> {
        let url = format!("{}{}{}", self.base_url, STATUS_PREFIX, location);
        let response = self.with_auth(self.http.get(&url)).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body: StatusResponse = response.json().await?;
                Ok(PollOutcome::Complete(body.output))
            }
            StatusCode::ACCEPTED => Ok(PollOutcome::Processing),
            status => Ok(PollOutcome::Failed(status.as_u16())),
        }
    }

    /// Fetch one rehosted NDJSON result file and extract its patient ids.
    pub async fn fetch_patient_ids(&self, file_url: &str) -> Result<Vec<String>, TorchError> {
        let response = self
            .with_auth(self.http.get(file_url))
            .header(ACCEPT, "application/x-ndjson")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                url = file_url,
                "result file fetch failed"
            );
            return Err(TorchError::ResultFetch {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(ndjson::parse_patient_ids(&body)?)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Some(auth) => request.basic_auth(&auth.username, Some(&auth.password)),
            None => request,
        }
    }
}
