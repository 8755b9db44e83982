//! Wire types of the gamification service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ActionId;

/// Body of `POST /auth/token`
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

impl TokenRequest {
    /// Resource-owner password grant
    pub fn password(api_key: &str, username: &str, password: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            grant_type: "password".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body the service returns with non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /player/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDto {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Either a URL or an object of sized variants (`{"small": {"url": ..}}`)
    #[serde(default)]
    pub image: Option<serde_json::Value>,
}

/// `GET /player/{id}/status`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatusDto {
    #[serde(default)]
    pub total_points: f64,
    /// Completed challenges, keyed by challenge id
    #[serde(default)]
    pub challenges: Option<HashMap<String, serde_json::Value>>,
}

/// Element of `GET /challenge`
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Vec<PointsDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsDto {
    #[serde(default)]
    pub total: f64,
}

/// `GET /leaderboard/{id}/leaders`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardDto {
    #[serde(default)]
    pub leaders: Vec<LeaderDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderDto {
    pub player: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub image: Option<serde_json::Value>,
    #[serde(default)]
    pub position: i64,
}

/// Body of `POST /action/log`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLog {
    #[serde(rename = "actionId")]
    pub action_id: ActionId,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Pick a displayable URL out of an `image` field
pub fn image_url(image: Option<&serde_json::Value>) -> Option<String> {
    let image = image?;
    if let Some(url) = image.as_str() {
        return Some(url.to_string()).filter(|u| !u.is_empty());
    }
    ["/small/url", "/medium/url", "/original/url", "/url"]
        .iter()
        .find_map(|ptr| image.pointer(ptr).and_then(|v| v.as_str()))
        .map(str::to_string)
}
