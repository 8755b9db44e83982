//! Once-per-day coin reward

use anyhow::Context;
use chrono::{Local, NaiveDate};

use super::FarmState;
use crate::FarmError;
use crate::store::{DAILY_REWARD_KEY, FARM_KEY, KeyValueStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the reward has not been claimed on `today`
pub fn reward_available(store: &KeyValueStore, today: NaiveDate) -> bool {
    let Some(last) = store.get(DAILY_REWARD_KEY) else {
        return true;
    };

    // Anything that is not exactly today's date counts as "not claimed today"
    NaiveDate::parse_from_str(last, DATE_FORMAT).map_or(true, |last| last != today)
}

/// Grant `coins` once per calendar day.
///
/// Returns the new balance. The farm and the claim date are persisted in one
/// write; `farm` is only updated once that write succeeds.
pub fn claim_daily_reward(
    store: &mut KeyValueStore,
    farm: &mut FarmState,
    coins: i64,
    today: NaiveDate,
) -> Result<i64, FarmError> {
    if !reward_available(store, today) {
        return Err(FarmError::RewardAlreadyClaimed);
    }

    let mut next = farm.clone();
    next.coins += coins;
    let serialized = serde_json::to_string(&next).context("Failed to serialize farm state")?;

    store.set_all([
        (FARM_KEY, serialized),
        (DAILY_REWARD_KEY, today.format(DATE_FORMAT).to_string()),
    ])?;
    *farm = next;

    tracing::info!("Daily reward claimed: +{} coins ({} total)", coins, farm.coins);
    Ok(farm.coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_garbage_date_means_available() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = KeyValueStore::open(dir.path().join("storage.json")).unwrap();
        store.set(DAILY_REWARD_KEY, "Fri Oct 16 2026").unwrap();

        assert!(reward_available(&store, date("2026-10-16")));
    }

    #[test]
    fn test_next_day_is_available_again() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = KeyValueStore::open(dir.path().join("storage.json")).unwrap();
        let mut farm = FarmState::default();

        claim_daily_reward(&mut store, &mut farm, 50, date("2026-10-16")).unwrap();
        assert!(!reward_available(&store, date("2026-10-16")));
        assert!(reward_available(&store, date("2026-10-17")));
    }

    #[test]
    fn test_failed_write_grants_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut store = KeyValueStore::open(&path).unwrap();
        let mut farm = FarmState::default();
        std::fs::create_dir(dir.path().join("storage.json.lock")).unwrap();

        let result = claim_daily_reward(&mut store, &mut farm, 50, date("2026-10-16"));

        assert!(matches!(result, Err(FarmError::Storage(_))));
        assert_eq!(farm.coins, 120);
        assert!(reward_available(&store, date("2026-10-16")));
        assert_eq!(FarmState::load(&store), FarmState::default());
    }
}
