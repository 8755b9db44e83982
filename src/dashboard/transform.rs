//! Reshape service responses into view records

use crate::api::types::{ChallengeDto, LeaderboardDto, PlayerDto, PlayerStatusDto, image_url};
use crate::{Mission, PlayerProfile, PlayerStatus, RankingEntry};

/// Missions in catalog order, completed when the status lists the challenge
pub fn missions_from(catalog: Vec<ChallengeDto>, status: &PlayerStatusDto) -> Vec<Mission> {
    catalog
        .into_iter()
        .map(|challenge| {
            let completed = status
                .challenges
                .as_ref()
                .is_some_and(|done| done.contains_key(&challenge.id));
            let xp = challenge
                .points
                .first()
                .map(|p| points(p.total))
                .unwrap_or(0);

            Mission {
                id: challenge.id,
                text: challenge.challenge.unwrap_or_default(),
                description: challenge.description.unwrap_or_default(),
                xp,
                completed,
            }
        })
        .collect()
}

/// Ranking rows ordered by the position the service assigned
pub fn ranking_from(board: LeaderboardDto) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = board
        .leaders
        .into_iter()
        .map(|leader| RankingEntry {
            avatar_url: image_url(leader.image.as_ref()),
            player_id: leader.player,
            name: leader.name.unwrap_or_default(),
            total_xp: points(leader.total),
            position: leader.position,
        })
        .collect();

    // Stable: equal positions keep the service's order
    ranking.sort_by_key(|entry| entry.position);
    ranking
}

pub fn status_from(status: &PlayerStatusDto) -> PlayerStatus {
    PlayerStatus {
        total_points: points(status.total_points),
    }
}

pub fn profile_from(player: PlayerDto, username: &str) -> PlayerProfile {
    PlayerProfile {
        avatar_url: image_url(player.image.as_ref()),
        id: player.id.unwrap_or_else(|| username.to_string()),
        name: player.name.unwrap_or_else(|| username.to_string()),
    }
}

/// The service reports points as JSON numbers that may carry a fraction
fn points(value: f64) -> i64 {
    if value.is_finite() { value.round() as i64 } else { 0 }
}
