//! Store and course listings

use anyhow::Result;

use fazendinha::catalog::{COURSES, STORE_ITEMS};
use fazendinha::farm::{self, FarmState};
use fazendinha::XpProgress;

use super::App;

pub fn shop_command(app: &App) {
    let coins = FarmState::load(&app.store).coins;
    println!("Item store (you have {} coins):\n", coins);

    for item in STORE_ITEMS {
        println!("  #{} {} {} - {} coins", item.id, item.icon, item.name, item.price);
        println!("      {}", item.description);
    }
}

pub fn buy_command(app: &mut App, item_id: u32) -> Result<()> {
    app.session()?;

    let mut farm = FarmState::load(&app.store);
    let item = farm::buy(&mut farm, item_id)?;
    farm.save(&mut app.store)?;

    println!(
        "Bought {} {}! {} coins left.",
        item.icon, item.name, farm.coins
    );
    Ok(())
}

pub fn courses_command() {
    println!("Available courses:\n");

    for course in COURSES {
        let progress = XpProgress::new(course.progress.into(), 100);
        println!("  {}", course.title);
        println!("      {}", course.description);
        println!("      {} {}%", progress.bar(20), course.progress);
    }
}
