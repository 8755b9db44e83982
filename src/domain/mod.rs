//! Core domain types for the farm

mod action;
mod mission;
mod player;
mod progress;
mod session;

pub use action::ActionId;
pub use mission::Mission;
pub use player::{PlayerProfile, PlayerStatus, RankingEntry};
pub use progress::{PlantStage, XpProgress, PLANT_STAGES};
pub use session::Session;
