//! Discovery-point scanning

use rand::Rng;
use rand::seq::SliceRandom;

use super::FarmState;
use crate::FarmError;
use crate::catalog::{self, Collectible, DiscoveryPoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A new collectible was added to the farm
    Found(&'static Collectible),
    NothingFound,
    /// Every collectible is already in the collection
    AllCollected,
}

/// Scan a QR code. A known discovery point has `find_chance` of yielding a
/// random collectible the player does not own yet.
pub fn scan<R: Rng + ?Sized>(
    farm: &mut FarmState,
    qr_id: &str,
    find_chance: f64,
    rng: &mut R,
) -> Result<(&'static DiscoveryPoint, ScanOutcome), FarmError> {
    let point = catalog::discovery_point(qr_id)
        .ok_or_else(|| FarmError::UnknownQrCode(qr_id.trim().to_string()))?;

    let missing = farm.missing_collectibles();
    if missing.is_empty() {
        return Ok((point, ScanOutcome::AllCollected));
    }

    // gen_bool panics outside [0, 1]
    let chance = if find_chance.is_nan() { 0.0 } else { find_chance.clamp(0.0, 1.0) };
    let found = if rng.gen_bool(chance) {
        missing.choose(rng).copied()
    } else {
        None
    };
    let Some(item) = found else {
        tracing::debug!("Nothing found at {}", point.place);
        return Ok((point, ScanOutcome::NothingFound));
    };

    farm.collected_items.push(item.id);
    tracing::info!("Found {} at {}", item.name, point.place);
    Ok((point, ScanOutcome::Found(item)))
}
