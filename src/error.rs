//! Custom error types for the draft commentary service
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

use crate::llm::Protocol;

/// Top-level errors surfaced to the HTTP caller
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid draft pick: {0}")]
    InvalidEvent(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl ServiceError {
    /// HTTP status code for this error class
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Config(_) => 500,
            ServiceError::InvalidEvent(_) => 422,
            ServiceError::Generation(_) | ServiceError::Delivery(_) => 502,
        }
    }

    /// Short machine-readable kind for the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Config(_) => "config",
            ServiceError::InvalidEvent(_) => "invalid_event",
            ServiceError::Generation(_) => "generation",
            ServiceError::Delivery(_) => "delivery",
        }
    }
}

/// Completion service errors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("LLM error ({protocol}): HTTP {status}: {body}")]
    Upstream {
        protocol: Protocol,
        status: u16,
        body: String,
    },

    #[error("LLM returned no content ({protocol})")]
    EmptyContent { protocol: Protocol },

    #[error("LLM response was not valid JSON ({protocol}): {source}")]
    Malformed {
        protocol: Protocol,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not build LLM request: {0}")]
    Request(#[from] async_openai::error::OpenAIError),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Webhook delivery errors
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Discord post failed: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{name} is required")]
    Missing { name: &'static str },

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
