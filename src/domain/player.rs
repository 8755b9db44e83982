use serde::{Deserialize, Serialize};

/// Points the service has recorded for the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub total_points: i64,
}

/// Display data for the logged-in player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// One row of the class ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player_id: String,
    pub name: String,
    pub total_xp: i64,
    pub avatar_url: Option<String>,
    pub position: i64,
}

impl RankingEntry {
    /// Whether this row belongs to the given profile
    pub fn is_player(&self, profile: &PlayerProfile) -> bool {
        self.player_id == profile.id || (!profile.name.is_empty() && self.name == profile.name)
    }
}
