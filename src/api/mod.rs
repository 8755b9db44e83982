//! Gamification service client
//!
//! [`GamificationApi`] is the seam between the farm logic and the network.
//! [`FunifierClient`] is the HTTP implementation; tests provide their own.

mod client;
mod http;
pub mod types;

use async_trait::async_trait;

use crate::{ApiError, Session};
pub use client::FunifierClient;
use types::{ActionLog, ChallengeDto, LeaderboardDto, PlayerDto, PlayerStatusDto};

/// Operations the farm needs from the gamification service
#[async_trait]
pub trait GamificationApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn issue_token(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn player_profile(&self, session: &Session) -> Result<PlayerDto, ApiError>;

    async fn player_status(&self, session: &Session) -> Result<PlayerStatusDto, ApiError>;

    async fn challenges(&self, session: &Session) -> Result<Vec<ChallengeDto>, ApiError>;

    async fn leaderboard(&self, session: &Session) -> Result<LeaderboardDto, ApiError>;

    /// Record a scoring action for the player
    async fn log_action(&self, session: &Session, log: &ActionLog) -> Result<(), ApiError>;
}
