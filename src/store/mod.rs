//! Persistent key-value storage
//!
//! A flat string map kept in `~/.fazendinha/storage.json`. Every write goes
//! straight to disk, so values survive between runs until they are removed.

mod session;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, write_atomic};

/// Bearer token of the logged-in player
pub const TOKEN_KEY: &str = "token";
/// Player id of the logged-in player
pub const USERNAME_KEY: &str = "username";
/// Date (YYYY-MM-DD) the daily reward was last claimed
pub const DAILY_REWARD_KEY: &str = "dailyRewardLastClaimed";
/// Serialized [`crate::farm::FarmState`]
pub const FARM_KEY: &str = "farm";

/// File-backed string map
#[derive(Debug)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl KeyValueStore {
    /// ~/.fazendinha/storage.json
    pub fn default_path() -> PathBuf {
        Config::global_config_dir().join("storage.json")
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read storage file: {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse storage file: {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened storage {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.set_all([(key, value.into())])
    }

    /// Write several keys with a single flush.
    ///
    /// Either every value reaches disk or the store is left as it was.
    pub fn set_all<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, String)>) -> Result<()> {
        let previous: Vec<(String, Option<String>)> = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), self.entries.insert(key.to_string(), value)))
            .collect();

        if let Err(e) = self.flush() {
            // Reverse order so a key written twice ends at its original value
            for (key, old) in previous.into_iter().rev() {
                match old {
                    Some(value) => self.entries.insert(key, value),
                    None => self.entries.remove(&key),
                };
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        let Some(old) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), old);
            return Err(e);
        }
        Ok(())
    }

    /// Read a JSON value stored under `key`.
    ///
    /// Unparseable values are treated as absent and logged.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed value for '{}': {}", key, e);
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;
        self.set(key, raw)
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)
            .with_context(|| "Failed to serialize storage")?;
        write_atomic(&self.path, &content)
    }
}
