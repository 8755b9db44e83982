//! CLI command implementations

pub mod collection;
pub mod complete;
pub mod login;
pub mod reward;
pub mod shop;
pub mod status;

use anyhow::{Context, Result};
use std::path::Path;

use fazendinha::api::FunifierClient;
use fazendinha::auth;
use fazendinha::config::Config;
use fazendinha::dashboard::{self, Dashboard};
use fazendinha::store::KeyValueStore;
use fazendinha::Session;

/// Loaded config and storage shared by every command
pub struct App {
    pub config: Config,
    pub store: KeyValueStore,
}

impl App {
    pub fn open(config_path: Option<&Path>, storage_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let store = KeyValueStore::open(
            storage_path
                .map(Path::to_path_buf)
                .unwrap_or_else(KeyValueStore::default_path),
        )?;
        Ok(Self { config, store })
    }

    pub fn client(&self) -> FunifierClient {
        FunifierClient::new(&self.config.api)
    }

    /// Session guard for commands that need a logged-in player
    pub fn session(&self) -> Result<Session> {
        auth::require_session(&self.store)
            .context("Run `fazendinha login <username>` first")
    }

    /// Load the dashboard, giving up if the user presses Ctrl-C
    pub async fn load_dashboard(&self, session: &Session) -> Result<Dashboard> {
        let client = self.client();
        println!("Loading farm...");

        tokio::select! {
            result = dashboard::load_dashboard(&client, Some(session)) => Ok(result?),
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("Load cancelled");
                anyhow::bail!("Cancelled")
            }
        }
    }
}
