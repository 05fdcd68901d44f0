//! Error types for the heroes API client.
//!
//! `HeroClient` never returns these to its callers; every variant is logged
//! and replaced by the operation's fallback. They surface directly only from
//! the lower-level `HeroRequests` parsers and `Transport` implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, reset,
    /// unreadable body, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors raised while loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}
