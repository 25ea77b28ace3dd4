//! Error types shared across the player

use thiserror::Error;

/// Network failures from book and artwork fetches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Request failed with an HTTP status code and server message
    ///
    /// A code of zero (or below) means the request never reached the
    /// server (connection lost, timeout).
    #[error("HTTP error {0}: {1}")]
    HttpError(i32, String),

    /// Response decoding failed
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Response data is not valid JSON
    #[error("Received data is invalid")]
    InvalidData,

    /// All other errors
    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    /// Human-readable message for the user-facing alert
    pub fn message(&self) -> String {
        match self {
            Self::HttpError(code, message) => {
                if *code > 0 {
                    message.clone()
                } else {
                    "Your internet connection seems to be lost".to_string()
                }
            }
            Self::Parsing(text) => text.clone(),
            Self::InvalidData => "Received data is invalid".to_string(),
            Self::Other(text) => text.clone(),
        }
    }
}

/// Media playback failures surfaced by the player engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Playback could not start (media not ready, decode failure, ...)
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

impl PlaybackError {
    /// Human-readable message for the user-facing alert
    pub fn message(&self) -> String {
        match self {
            Self::PlaybackFailed(text) => text.clone(),
        }
    }
}

/// Purchase and subscription failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Fetching the product offering failed
    #[error("Product fetch failed: {0}")]
    Fetch(String),

    /// Checking the subscription status failed
    #[error("Subscription status check failed: {0}")]
    Status(String),

    /// The purchase attempt failed
    #[error("Purchase failed: {0}")]
    Purchase(String),

    /// The transaction completed but its receipt failed validation
    #[error("Purchase verification failed: {0}")]
    Verification(String),

    /// The transaction awaits external approval
    #[error("Purchase pending: {0}")]
    Pending(String),
}

impl PurchaseError {
    /// Human-readable message for the user-facing alert
    pub fn message(&self) -> String {
        match self {
            Self::Fetch(text)
            | Self::Status(text)
            | Self::Purchase(text)
            | Self::Verification(text)
            | Self::Pending(text) => text.clone(),
        }
    }
}

/// Opaque commerce-layer failure reported by a [`crate::StoreClient`]
///
/// The purchase gate maps these into the [`PurchaseError`] variant matching
/// the operation that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);
