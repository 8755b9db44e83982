//! Configuration loading and management

mod io;
mod settings;

pub(crate) use io::write_atomic;
pub use settings::{ApiSettings, LoginSettings, RewardSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Gamification service connection
    #[serde(default)]
    pub api: ApiSettings,

    /// Offline login credentials
    #[serde(default)]
    pub login: LoginSettings,

    /// Coin and collectible rewards
    #[serde(default)]
    pub rewards: RewardSettings,
}
