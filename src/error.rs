//! Stripe SDK error types

use std::fmt;

use thiserror::Error;

/// Request option fields that go through normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestOptionField {
    ApiKey,
    ClientId,
    IdempotencyKey,
    AccountId,
    ApiVersionOverride,
}

impl RequestOptionField {
    /// Field name as used in builder methods
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOptionField::ApiKey => "api_key",
            RequestOptionField::ClientId => "client_id",
            RequestOptionField::IdempotencyKey => "idempotency_key",
            RequestOptionField::AccountId => "account_id",
            RequestOptionField::ApiVersionOverride => "api_version_override",
        }
    }
}

impl fmt::Display for RequestOptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All possible errors from the Stripe SDK
#[derive(Error, Debug)]
pub enum StripeError {
    /// A request option was set to an empty or oversized value
    #[error("{message}")]
    InvalidRequestOptions {
        field: RequestOptionField,
        message: String,
    },

    /// A request option could not be used as an HTTP header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Params could not be form encoded
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment variable held an unusable value
    #[error("Invalid value for {var}: {value:?}")]
    Config { var: String, value: String },
}

impl StripeError {
    pub(crate) fn invalid_option(field: RequestOptionField, message: impl Into<String>) -> Self {
        StripeError::InvalidRequestOptions {
            field,
            message: message.into(),
        }
    }

    /// Returns the request option field that failed validation, if any
    pub fn field(&self) -> Option<RequestOptionField> {
        match self {
            StripeError::InvalidRequestOptions { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type for Stripe SDK operations
pub type Result<T> = std::result::Result<T, StripeError>;
