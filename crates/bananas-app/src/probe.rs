//! Probe client: the single HTTP GET behind every test run
//!
//! [`ProbeClient`] is the seam the runner talks to. [`HttpProbeClient`] is the
//! reqwest-backed implementation; tests substitute scripted fakes.

use std::error::Error as StdError;

use serde_json::Value;
use thiserror::Error;

/// Why a probe produced no payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Connection refused, DNS failure, reset, ...
    #[error("{0}")]
    Transport(String),

    /// Response body was not valid JSON
    #[error("{0}")]
    Decode(String),

    /// Failure that carried no description
    #[error("Unknown error")]
    Unknown,
}

impl ProbeError {
    /// The failure's own description, if it has one
    pub fn message(&self) -> Option<&str> {
        match self {
            ProbeError::Transport(m) | ProbeError::Decode(m) if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}

/// Issues one GET and decodes the body as JSON
#[trait_variant::make(ProbeClient: Send)]
pub trait LocalProbeClient {
    /// Fetch `url`. The status code is not inspected.
    async fn fetch(&self, url: &str) -> Result<Value, ProbeError>;
}

/// reqwest implementation, no timeout and no custom headers
#[derive(Debug, Clone, Default)]
pub struct HttpProbeClient {
    client: reqwest::Client,
}

impl HttpProbeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ProbeClient for HttpProbeClient {
    async fn fetch(&self, url: &str) -> Result<Value, ProbeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(describe(&e)))?;

        tracing::debug!("{} -> {}", url, response.status());

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                ProbeError::Decode(describe(&e))
            } else {
                ProbeError::Transport(describe(&e))
            }
        })
    }
}

/// Error text with its source chain, skipping repeats
fn describe(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
