use std::collections::BTreeMap;
use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use eco_core::model::{QuestionId, QuizResult};

use crate::error::SubmitError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const SUBMIT_PATH: &str = "/api/quiz/submit";

/// Body of the submission call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub answers: BTreeMap<QuestionId, String>,
    #[serde(rename = "timeElapsed")]
    pub time_elapsed: u64,
}

/// Sends a finished quiz somewhere that can score it.
#[async_trait]
pub trait QuizSubmitter: Send + Sync {
    /// # Errors
    ///
    /// Returns `SubmitError` for transport failures, non-success statuses and
    /// malformed result payloads alike.
    async fn submit(&self, request: &SubmissionRequest) -> Result<QuizResult, SubmitError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            path: SUBMIT_PATH.into(),
        }
    }
}

impl SubmitConfig {
    /// Reads `ECO_API_URL`, falling back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("ECO_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::with_base_url(base_url)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// `QuizSubmitter` backed by the site's JSON endpoint.
#[derive(Clone)]
pub struct HttpQuizSubmitter {
    client: Client,
    config: SubmitConfig,
}

impl HttpQuizSubmitter {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SubmitConfig::from_env())
    }

    #[must_use]
    pub fn new(config: SubmitConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }
}

#[async_trait]
impl QuizSubmitter for HttpQuizSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<QuizResult, SubmitError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmitError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        parse_result(&body)
    }
}

/// Decode and sanity-check a result payload.
///
/// # Errors
///
/// Returns `SubmitError::Malformed` when a field is missing or mistyped and
/// `SubmitError::Result` when the percentage is not a usable number.
pub fn parse_result(body: &[u8]) -> Result<QuizResult, SubmitError> {
    let result: QuizResult = serde_json::from_slice(body)?;
    Ok(result.validate()?)
}
