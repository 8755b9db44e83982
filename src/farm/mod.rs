//! Local farm state: coins, collectibles and rewards
//!
//! Unlike points and missions, none of this is known to the gamification
//! service. It lives in the key-value store under [`FARM_KEY`].

mod daily;
mod scanner;
mod shop;

pub use daily::{claim_daily_reward, reward_available, today};
pub use scanner::{ScanOutcome, scan};
pub use shop::buy;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::XpProgress;
use crate::catalog::{self, Collectible};
use crate::store::{FARM_KEY, KeyValueStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmState {
    pub coins: i64,
    /// Points needed to fill the XP bar
    pub xp_goal: i64,
    /// Ids of collectibles found so far, in order found
    pub collected_items: Vec<u32>,
}

impl Default for FarmState {
    /// A new farm starts with some coins and the first collectible
    fn default() -> Self {
        Self {
            coins: 120,
            xp_goal: 200,
            collected_items: vec![1],
        }
    }
}

impl FarmState {
    /// Stored farm, or a new one if nothing (valid) is stored
    pub fn load(store: &KeyValueStore) -> Self {
        store.get_json(FARM_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &mut KeyValueStore) -> Result<()> {
        store.set_json(FARM_KEY, self)
    }

    pub fn has_collected(&self, id: u32) -> bool {
        self.collected_items.contains(&id)
    }

    /// Collectibles not found yet, in catalog order
    pub fn missing_collectibles(&self) -> Vec<&'static Collectible> {
        catalog::COLLECTIBLES
            .iter()
            .filter(|c| !self.has_collected(c.id))
            .collect()
    }

    pub fn progress(&self, total_points: i64) -> XpProgress {
        XpProgress::new(total_points, self.xp_goal)
    }
}
