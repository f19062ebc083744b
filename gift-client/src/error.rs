//! Client error types

use reqwest::StatusCode;
use shared::OrderValidationError;
use thiserror::Error;

/// Transport-level client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status the caller did not accept
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// No auth token available
    #[error("Authentication required")]
    Unauthorized,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Order submission failed
///
/// The order endpoint is pass/fail only. The status is kept for logging,
/// not for the message shown to the user.
#[derive(Debug, Error)]
#[error("failed to place order")]
pub struct OrderSubmitError {
    pub status: Option<StatusCode>,
}

/// Adding to the wishlist failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishlistSubmitError {
    /// No auth token; no request was sent
    #[error("login required")]
    AuthenticationRequired,

    /// 401
    #[error("authentication required")]
    Unauthorized,

    /// 400
    #[error("invalid request")]
    BadRequest,

    /// 404
    #[error("product not found")]
    NotFound,

    /// Any other status or transport failure
    #[error("failed to add to wishlist")]
    Failed,
}

impl WishlistSubmitError {
    /// Bucket a non-success status
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::Failed,
        }
    }
}

/// Errors from the detail page → order page flow
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Rejected locally; nothing was sent
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("login required")]
    AuthenticationRequired,

    /// The order page was opened without a staged draft
    #[error("no pending order")]
    NoDraft,

    #[error(transparent)]
    Submit(#[from] OrderSubmitError),
}
