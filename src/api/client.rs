//! HTTP client for the Funifier gamification service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::GamificationApi;
use super::http::{encode_url_path_segment, map_error, read_json};
use super::types::{
    ActionLog, ChallengeDto, LeaderboardDto, PlayerDto, PlayerStatusDto, TokenRequest,
    TokenResponse,
};
use crate::config::ApiSettings;
use crate::{ApiError, Session};

const SOCKET_GRACE: Duration = Duration::from_secs(1);

/// Client for the gamification REST API.
///
/// ureq is blocking, so every request runs on the blocking pool and is raced
/// against the configured deadline. A request that misses the deadline is
/// reported as [`ApiError::Timeout`]. The agent's own timeout sits a second
/// past the deadline and only releases the blocking thread.
#[derive(Clone)]
pub struct FunifierClient {
    base_url: String,
    api_key: String,
    leaderboard_id: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl FunifierClient {
    pub fn new(settings: &ApiSettings) -> Self {
        let timeout = settings.timeout();
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout.min(Duration::from_secs(5)))
            .timeout(timeout + SOCKET_GRACE)
            .build();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            leaderboard_id: settings.leaderboard_id.clone(),
            timeout,
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn player_url(&self, session: &Session, suffix: &str) -> String {
        let id = encode_url_path_segment(&session.username);
        self.url(&format!("player/{id}{suffix}"))
    }

    /// Run a blocking request on the blocking pool under the deadline
    async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(ureq::Agent) -> Result<T, ApiError> + Send + 'static,
    {
        let agent = self.agent.clone();
        let task = tokio::task::spawn_blocking(move || f(agent));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(ApiError::Transport(format!("Request task failed: {e}"))),
            Err(_) => Err(ApiError::Timeout(self.timeout)),
        }
    }

    async fn get_json<T>(&self, url: String, session: &Session) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        tracing::debug!("GET {}", url);
        let auth = session.bearer();
        self.run(move |agent| {
            let resp = agent
                .get(&url)
                .set("Authorization", &auth)
                .set("Accept", "application/json")
                .call()
                .map_err(map_error)?;
            read_json(resp)
        })
        .await
    }
}

#[async_trait]
impl GamificationApi for FunifierClient {
    async fn issue_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url("auth/token");
        let body = TokenRequest::password(&self.api_key, username, password);
        tracing::debug!("POST {} (user {})", url, username);

        let token: TokenResponse = self
            .run(move |agent| {
                let resp = agent
                    .post(&url)
                    .set("Accept", "application/json")
                    .send_json(&body)
                    .map_err(map_error)?;
                read_json(resp)
            })
            .await?;

        Ok(token.access_token)
    }

    async fn player_profile(&self, session: &Session) -> Result<PlayerDto, ApiError> {
        self.get_json(self.player_url(session, ""), session).await
    }

    async fn player_status(&self, session: &Session) -> Result<PlayerStatusDto, ApiError> {
        self.get_json(self.player_url(session, "/status"), session)
            .await
    }

    async fn challenges(&self, session: &Session) -> Result<Vec<ChallengeDto>, ApiError> {
        self.get_json(self.url("challenge"), session).await
    }

    async fn leaderboard(&self, session: &Session) -> Result<LeaderboardDto, ApiError> {
        let id = encode_url_path_segment(&self.leaderboard_id);
        self.get_json(self.url(&format!("leaderboard/{id}/leaders")), session)
            .await
    }

    async fn log_action(&self, session: &Session, log: &ActionLog) -> Result<(), ApiError> {
        let url = self.url("action/log");
        let auth = session.bearer();
        let body = log.clone();
        tracing::debug!("POST {} ({})", url, body.action_id);

        self.run(move |agent| {
            agent
                .post(&url)
                .set("Authorization", &auth)
                .set("Accept", "application/json")
                .send_json(&body)
                .map_err(map_error)?;
            Ok(())
        })
        .await
    }
}
