//! Daily reward command

use anyhow::Result;

use fazendinha::farm::{self, FarmState};
use fazendinha::FarmError;

use super::App;

pub fn reward_command(app: &mut App) -> Result<()> {
    app.session()?;

    let mut farm = FarmState::load(&app.store);
    let coins = app.config.rewards.daily_coins;

    match farm::claim_daily_reward(&mut app.store, &mut farm, coins, farm::today()) {
        Ok(balance) => {
            println!("🎁 Daily reward! +{} coins (you now have {}).", coins, balance);
            Ok(())
        }
        Err(FarmError::RewardAlreadyClaimed) => {
            println!("You already claimed today's reward. Come back tomorrow!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
