//! Complete command implementation

use anyhow::Result;

use fazendinha::dashboard::{self, CompletionOutcome};
use fazendinha::farm::FarmState;
use fazendinha::FarmError;

use super::App;
use super::status::{print_farm, print_missions};

/// Complete missions one after another, then show the updated farm
pub async fn complete_command(app: &mut App, mission_ids: &[String]) -> Result<()> {
    let session = app.session()?;
    let mut board = app.load_dashboard(&session).await?;
    let client = app.client();
    let mut rejected = 0usize;

    for id in mission_ids {
        match dashboard::complete_mission(&client, Some(&session), &mut board, id).await {
            Ok(CompletionOutcome::Confirmed { xp, .. }) => {
                let text = board.mission(id).map(|m| m.text.as_str()).unwrap_or(id);
                println!("🎉 {} completed! +{} XP", text, xp);
            }
            Ok(CompletionOutcome::Skipped) => {
                println!("Mission {} is unknown or already completed.", id);
            }
            Err(FarmError::ActionUnmapped { xp }) => {
                // Stays completed on screen only; the service never hears of it
                tracing::warn!("Mission {} ({} XP) was not sent to the server", id, xp);
            }
            Err(e @ FarmError::ActionRejected(_)) => {
                eprintln!("Oops! {}", e);
                rejected += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    print_farm(&board, &FarmState::load(&app.store));
    print_missions(&board);

    if rejected > 0 {
        anyhow::bail!("{} mission(s) could not be confirmed", rejected);
    }
    Ok(())
}
