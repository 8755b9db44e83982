//! Shared test utilities: an in-memory gamification service

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use fazendinha::api::GamificationApi;
use fazendinha::api::types::{ActionLog, ChallengeDto, LeaderboardDto, PlayerDto, PlayerStatusDto};
use fazendinha::store::KeyValueStore;
use fazendinha::{ApiError, Session};

/// Fake service with per-endpoint failures and call recording
#[derive(Default)]
pub struct FakeApi {
    pub profile_error: Option<ApiError>,
    pub status_error: Option<ApiError>,
    pub challenges_error: Option<ApiError>,
    pub leaderboard_error: Option<ApiError>,
    pub action_error: Option<ApiError>,
    pub token_error: Option<ApiError>,

    /// Total number of requests made, any endpoint
    pub calls: AtomicUsize,
    pub actions: Mutex<Vec<ActionLog>>,
    pub token_requests: Mutex<Vec<(String, String)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn logged_actions(&self) -> Vec<ActionLog> {
        self.actions.lock().unwrap().clone()
    }

    fn hit(&self, error: &Option<ApiError>) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        message: "Unauthorized".to_string(),
        description: None,
    }
}

pub fn session() -> Session {
    Session::new("maria", "token-123")
}

/// Store in a fresh temp dir; keep the dir alive for the test's duration
pub fn temp_store() -> (TempDir, KeyValueStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = KeyValueStore::open(dir.path().join("storage.json")).expect("Failed to open store");
    (dir, store)
}

#[async_trait]
impl GamificationApi for FakeApi {
    async fn issue_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.hit(&self.token_error)?;
        self.token_requests
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));
        Ok(format!("token-for-{username}"))
    }

    async fn player_profile(&self, session: &Session) -> Result<PlayerDto, ApiError> {
        self.hit(&self.profile_error)?;
        Ok(serde_json::from_value(json!({
            "_id": session.username,
            "name": "Maria",
            "image": {"small": {"url": "https://img/maria.png"}}
        }))
        .unwrap())
    }

    async fn player_status(&self, _session: &Session) -> Result<PlayerStatusDto, ApiError> {
        self.hit(&self.status_error)?;
        Ok(serde_json::from_value(json!({
            "total_points": 75,
            "challenges": {"video": 1}
        }))
        .unwrap())
    }

    async fn challenges(&self, _session: &Session) -> Result<Vec<ChallengeDto>, ApiError> {
        self.hit(&self.challenges_error)?;
        Ok(serde_json::from_value(json!([
            {"_id": "quiz", "challenge": "Responder 3 perguntas de matemática", "description": "", "points": [{"total": 50}]},
            {"_id": "video", "challenge": "Assistir vídeo sobre agro", "description": "", "points": [{"total": 25}]},
            {"_id": "biblio", "challenge": "Escanear o Ponto de Descoberta", "description": "", "points": [{"total": 150}]},
            {"_id": "empreende", "challenge": "Fazer quiz de empreendedorismo", "description": "", "points": [{"total": 75}]},
            {"_id": "diario", "challenge": "Completar o desafio diário", "description": "", "points": [{"total": 100}]},
            {"_id": "estranho", "challenge": "Missão sem ação", "description": "", "points": [{"total": 60}]}
        ]))
        .unwrap())
    }

    async fn leaderboard(&self, _session: &Session) -> Result<LeaderboardDto, ApiError> {
        self.hit(&self.leaderboard_error)?;
        Ok(serde_json::from_value(json!({
            "leaders": [
                {"player": "joao", "name": "João", "total": 1100, "position": 2},
                {"player": "ana", "name": "Ana", "total": 950, "position": 3},
                {"player": "maria", "name": "Maria", "total": 1250, "position": 1}
            ]
        }))
        .unwrap())
    }

    async fn log_action(&self, _session: &Session, log: &ActionLog) -> Result<(), ApiError> {
        self.hit(&self.action_error)?;
        self.actions.lock().unwrap().push(log.clone());
        Ok(())
    }
}
