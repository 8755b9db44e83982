//! Collection and discovery-point commands

use anyhow::Result;

use fazendinha::catalog::COLLECTIBLES;
use fazendinha::farm::{self, FarmState, ScanOutcome};

use super::App;

pub fn collection_command(app: &App) -> Result<()> {
    app.session()?;

    let farm = FarmState::load(&app.store);
    println!(
        "Your collection ({}/{}):\n",
        farm.collected_items.len(),
        COLLECTIBLES.len()
    );

    for item in COLLECTIBLES {
        if farm.has_collected(item.id) {
            println!("  {} {} ({})", item.emoji, item.name, item.rarity);
            println!("      {}", item.description);
        } else {
            println!("  ❓ ???");
        }
    }
    Ok(())
}

pub fn scan_command(app: &mut App, code: &str) -> Result<()> {
    app.session()?;

    let mut farm = FarmState::load(&app.store);
    let chance = app.config.rewards.item_find_chance;
    let (point, outcome) = farm::scan(&mut farm, code, chance, &mut rand::thread_rng())?;

    println!("📍 Discovery point: {}", point.place);
    match outcome {
        ScanOutcome::Found(item) => {
            farm.save(&mut app.store)?;
            println!("You found {} {}! ({})", item.emoji, item.name, item.rarity);
            println!("  {}", item.description);
        }
        ScanOutcome::NothingFound => println!("Nothing here this time. Keep exploring!"),
        ScanOutcome::AllCollected => println!("Your collection is already complete!"),
    }
    Ok(())
}
