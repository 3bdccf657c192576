//! Error types shared across the crate.
//!
//! - [`ConfigError`] is fatal and only raised while loading settings at startup.
//! - [`ProviderError`] covers every failure talking to a third-party API. It is
//!   always recoverable: callers log it and fall back to an empty result.
//! - [`ValidationError`] rejects malformed request parameters.
//! - [`ApiError`] maps the last two onto HTTP responses.

use std::{fmt, io, path::PathBuf};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum ConfigError {
    MissingValue(&'static str),
    InvalidValue { key: &'static str, value: String },
    ReadFailed { path: PathBuf, source: io::Error },
    Malformed { path: PathBuf, source: serde_json::Error },
    EnvFile(dotenv::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(key) => write!(f, "{} must be set", key),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
            ConfigError::ReadFailed { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::Malformed { path, source } => {
                write!(f, "cannot parse {}: {}", path.display(), source)
            }
            ConfigError::EnvFile(e) => write!(f, "cannot load .env file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<dotenv::Error> for ConfigError {
    fn from(err: dotenv::Error) -> Self {
        ConfigError::EnvFile(err)
    }
}

#[derive(Debug)]
pub enum ProviderError {
    Transport {
        provider: &'static str,
        source: reqwest::Error,
    },
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },
    Malformed {
        provider: &'static str,
        source: serde_json::Error,
    },
    InvalidRequest {
        provider: &'static str,
        reason: String,
    },
}

impl ProviderError {
    pub fn provider(&self) -> &'static str {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::Malformed { provider, .. }
            | ProviderError::InvalidRequest { provider, .. } => provider,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Transport { provider, source } => {
                write!(f, "{}: request failed: {}", provider, source)
            }
            ProviderError::Status { provider, status } => {
                write!(f, "{}: unexpected status {}", provider, status)
            }
            ProviderError::Malformed { provider, source } => {
                write!(f, "{}: malformed response: {}", provider, source)
            }
            ProviderError::InvalidRequest { provider, reason } => {
                write!(f, "{}: {}", provider, reason)
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Transport { source, .. } => Some(source),
            ProviderError::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingParameter(&'static str),
    InvalidParameter { name: &'static str, value: String },
    InvalidBody(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingParameter(name) => write!(f, "missing parameter '{}'", name),
            ValidationError::InvalidParameter { name, value } => {
                write!(f, "invalid value '{}' for parameter '{}'", value, name)
            }
            ValidationError::InvalidBody(reason) => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Provider(ProviderError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::InvalidBody(rejection.body_text()))
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Provider(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, "INVALID_PARAMS", e.to_string()),
            // provider details stay in the server log
            ApiError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVICE_ERROR",
                "Error searching songs".to_string(),
            ),
        };

        (status, Json(json!({ "error": code, "details": details }))).into_response()
    }
}
