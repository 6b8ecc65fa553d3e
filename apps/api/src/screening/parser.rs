//! Client for the external resume-parsing AI service.
//!
//! The service is an opaque HTTP collaborator: this module only knows its
//! multipart upload endpoint and the JSON shape it returns. No other module
//! may call it directly.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::models::screening::ParsedResume;

const PARSE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parser service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<ParserError> for AppError {
    fn from(e: ParserError) -> Self {
        AppError::Parser(e.to_string())
    }
}

/// Pluggable resume parser. The production implementation talks to the
/// hosted AI service; tests can substitute a canned one.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, file_name: &str, data: Bytes) -> Result<ParsedResume, ParserError>;
}

/// The single parser client used by all screening handlers.
#[derive(Clone)]
pub struct HttpResumeParser {
    client: Client,
    url: String,
}

impl HttpResumeParser {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(PARSE_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl ResumeParser for HttpResumeParser {
    async fn parse(&self, file_name: &str, data: Bytes) -> Result<ParsedResume, ParserError> {
        let part = Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ParserError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ParsedResume = response.json().await?;
        debug!(
            "Parsed resume for candidate {}",
            parsed.candidate_info.candidate_id
        );
        Ok(parsed)
    }
}
