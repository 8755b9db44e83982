//! Settings configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gamification service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application key sent with token requests
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Leaderboard shown as the class ranking
    #[serde(default = "default_leaderboard_id")]
    pub leaderboard_id: String,

    /// Deadline for every request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_base_url() -> String {
    "https://service2.funifier.com/v3".to_string()
}

fn default_api_key() -> String {
    "68bc2b63b907ef364c465e82".to_string()
}

fn default_leaderboard_id() -> String {
    "E6cIhso".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            leaderboard_id: default_leaderboard_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Credentials that log in without contacting the service.
///
/// Meant for demos: the stored token is not accepted by the real API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSettings {
    #[serde(default = "default_bypass_username")]
    pub bypass_username: String,

    #[serde(default = "default_bypass_password")]
    pub bypass_password: String,

    /// Token stored for a bypass login
    #[serde(default = "default_bypass_token")]
    pub bypass_token: String,

    /// Username stored for a bypass login
    #[serde(default = "default_bypass_display_name")]
    pub bypass_display_name: String,
}

fn default_bypass_username() -> String {
    "test".to_string()
}

fn default_bypass_password() -> String {
    "test".to_string()
}

fn default_bypass_token() -> String {
    "fake-test-token".to_string()
}

fn default_bypass_display_name() -> String {
    "Usuário Teste".to_string()
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            bypass_username: default_bypass_username(),
            bypass_password: default_bypass_password(),
            bypass_token: default_bypass_token(),
            bypass_display_name: default_bypass_display_name(),
        }
    }
}

/// Reward tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardSettings {
    /// Coins granted by the daily reward
    #[serde(default = "default_daily_coins")]
    pub daily_coins: i64,

    /// Probability (0.0 - 1.0) that scanning a discovery point finds an item
    #[serde(default = "default_item_find_chance")]
    pub item_find_chance: f64,
}

fn default_daily_coins() -> i64 {
    50
}

fn default_item_find_chance() -> f64 {
    0.5
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            daily_coins: default_daily_coins(),
            item_find_chance: default_item_find_chance(),
        }
    }
}
