use super::FarmState;
use crate::FarmError;
use crate::catalog::{self, StoreItem};

/// Spend coins on a store item. Nothing changes if the player cannot afford it.
pub fn buy(farm: &mut FarmState, item_id: u32) -> Result<&'static StoreItem, FarmError> {
    let item = catalog::store_item(item_id).ok_or(FarmError::UnknownItem(item_id))?;

    if farm.coins < item.price {
        return Err(FarmError::InsufficientCoins {
            have: farm.coins,
            need: item.price,
        });
    }

    farm.coins -= item.price;
    tracing::info!("Bought {} for {} coins", item.name, item.price);
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_deducts_price() {
        let mut farm = FarmState::default();
        let item = buy(&mut farm, 1).unwrap();
        assert_eq!(item.price, 50);
        assert_eq!(farm.coins, 70);
    }

    #[test]
    fn test_buy_exact_balance() {
        let mut farm = FarmState {
            coins: 120,
            ..FarmState::default()
        };
        buy(&mut farm, 3).unwrap();
        assert_eq!(farm.coins, 0);
    }

    #[test]
    fn test_insufficient_coins_changes_nothing() {
        let mut farm = FarmState::default();
        let err = buy(&mut farm, 2).unwrap_err();
        assert!(matches!(
            err,
            FarmError::InsufficientCoins {
                have: 120,
                need: 200
            }
        ));
        assert_eq!(farm.coins, 120);
    }

    #[test]
    fn test_unknown_item() {
        let mut farm = FarmState::default();
        assert!(matches!(buy(&mut farm, 42), Err(FarmError::UnknownItem(42))));
    }
}
