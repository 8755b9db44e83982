//! Error types shared across the crate

use std::time::Duration;

/// Failure talking to the gamification service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// `error_description` from the response body, if there was one
        description: Option<String>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced to the player
#[derive(Debug, thiserror::Error)]
pub enum FarmError {
    #[error("Not logged in")]
    Unauthenticated,

    /// One of the parallel dashboard requests failed; nothing was loaded
    #[error("Could not load all player data: {0}")]
    AggregateLoadFailure(ApiError),

    #[error("No action configured for {xp} XP")]
    ActionUnmapped { xp: i64 },

    /// The service refused the mission completion; local state was rolled back
    #[error("The server did not accept this action, the change was undone: {0}")]
    ActionRejected(String),

    #[error("{0}")]
    AuthFailure(String),

    #[error("Daily reward already claimed today")]
    RewardAlreadyClaimed,

    #[error("Not enough coins: have {have}, need {need}")]
    InsufficientCoins { have: i64, need: i64 },

    #[error("Unknown store item: {0}")]
    UnknownItem(u32),

    #[error("Unknown QR code: {0}")]
    UnknownQrCode(String),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}
