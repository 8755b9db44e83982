//! Status command implementation

use anyhow::Result;

use fazendinha::dashboard::Dashboard;
use fazendinha::farm::{self, FarmState};
use fazendinha::PlantStage;

use super::App;

/// Show the farm, the missions and the class ranking
pub async fn status_command(app: &App) -> Result<()> {
    let session = app.session()?;
    let dashboard = app.load_dashboard(&session).await?;
    let farm = FarmState::load(&app.store);

    print_farm(&dashboard, &farm);
    print_missions(&dashboard);
    print_ranking(&dashboard);

    if farm::reward_available(&app.store, farm::today()) {
        println!(
            "\n🎁 Your daily reward is waiting: run `fazendinha reward` for {} coins.",
            app.config.rewards.daily_coins
        );
    }

    Ok(())
}

pub(super) fn print_farm(dashboard: &Dashboard, farm: &FarmState) {
    let points = dashboard.status.total_points;
    let stage = PlantStage::for_xp(points);
    let progress = farm.progress(points);

    println!("\n{} - Fazendinha do Saber\n", dashboard.profile.name);
    println!("  {} {}", stage.emoji, stage.label);
    if let Some(next) = PlantStage::xp_for_next(stage.level) {
        println!("  Next stage at {} XP", next);
    }
    println!("  XP:    {}", points);
    println!("  Coins: {}", farm.coins);
    println!(
        "  {} {} / {} XP ({:.0}%)",
        progress.bar(20),
        progress.current,
        progress.goal,
        progress.percentage()
    );
}

pub(super) fn print_missions(dashboard: &Dashboard) {
    println!("\nMissions ({} open):\n", dashboard.open_missions().count());

    for mission in &dashboard.missions {
        let mark = if mission.completed { "✓" } else { " " };
        println!("  [{}] {} (+{} XP)", mark, mission.text, mission.xp);
        if !mission.description.is_empty() {
            println!("      {}", mission.description);
        }
        if mission.is_open() {
            println!("      id: {}", mission.id);
        }
    }
}

fn print_ranking(dashboard: &Dashboard) {
    if dashboard.ranking.is_empty() {
        return;
    }

    println!("\nClass ranking:\n");
    for entry in &dashboard.ranking {
        let you = if entry.is_player(&dashboard.profile) { "  <- you" } else { "" };
        println!("  {:>3}. {:<24} {:>6} XP{}", entry.position, entry.name, entry.total_xp, you);
    }
}
