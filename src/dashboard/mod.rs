//! Player dashboard: loading and mission completion

pub mod completion;
mod loader;
pub mod transform;

pub use completion::{
    CompletionOutcome, CompletionStep, PendingCompletion, apply_completion, complete_mission,
};
pub use loader::load_dashboard;

use crate::{Mission, PlayerProfile, PlayerStatus, RankingEntry};

/// Everything the dashboard shows about the player, as loaded from the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub profile: PlayerProfile,
    pub status: PlayerStatus,
    pub missions: Vec<Mission>,
    pub ranking: Vec<RankingEntry>,
}

impl Dashboard {
    pub fn mission(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn open_missions(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter().filter(|m| m.is_open())
    }

    /// The player's own ranking row, if they are on the leaderboard
    pub fn own_ranking(&self) -> Option<&RankingEntry> {
        self.ranking.iter().find(|r| r.is_player(&self.profile))
    }
}
