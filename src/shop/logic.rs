//! Shop catalog and transactions.

use super::types::{Equipment, InventoryError, ItemKind, PlayerStats, ShopError, ShopItem};
use crate::core::constants::SHOP_RANGE_X;
use uuid::Uuid;

pub static SHOP_CATALOG: [ShopItem; 5] = [
    ShopItem {
        id: "rod_2",
        name: "Carbon Fiber Rod",
        kind: ItemKind::Rod,
        tier: 2,
        cost: 250,
        description: "Catches premium fish more often.",
    },
    ShopItem {
        id: "rod_3",
        name: "Neptune's Trident",
        kind: ItemKind::Rod,
        tier: 3,
        cost: 1000,
        description: "Attracts mythical beasts.",
    },
    ShopItem {
        id: "bait_2",
        name: "Grubs",
        kind: ItemKind::Bait,
        tier: 2,
        cost: 50,
        description: "Fish bite slightly faster.",
    },
    ShopItem {
        id: "bait_3",
        name: "Sparkle Lure",
        kind: ItemKind::Bait,
        tier: 3,
        cost: 200,
        description: "Fish bite much faster.",
    },
    ShopItem {
        id: "boat_2",
        name: "Reinforced Hull",
        kind: ItemKind::Boat,
        tier: 2,
        cost: 500,
        description: "Row faster against the current.",
    },
];

pub fn find_item(id: &str) -> Option<&'static ShopItem> {
    SHOP_CATALOG.iter().find(|item| item.id == id)
}

/// Highest tier on sale for a kind of gear.
pub fn max_tier(kind: ItemKind) -> u32 {
    SHOP_CATALOG
        .iter()
        .filter(|item| item.kind == kind)
        .map(|item| item.tier)
        .max()
        .unwrap_or(1)
}

pub fn is_owned(equipment: &Equipment, item: &ShopItem) -> bool {
    equipment.tier(item.kind) >= item.tier
}

/// True when the boat is moored close enough to the dock to trade.
pub fn near_shop(player_x: f64) -> bool {
    player_x < SHOP_RANGE_X
}

/// Buys an item, raising the matching gear tier. Returns the new balance.
pub fn buy(player: &mut PlayerStats, item_id: &str) -> Result<u64, ShopError> {
    let item = find_item(item_id).ok_or_else(|| ShopError::UnknownItem(item_id.to_string()))?;
    if is_owned(&player.equipment, item) {
        return Err(ShopError::AlreadyOwned);
    }
    if player.money < item.cost {
        return Err(ShopError::InsufficientFunds {
            cost: item.cost,
            money: player.money,
        });
    }
    player.money -= item.cost;
    player.equipment.raise(item.kind, item.tier);
    tracing::info!(item = item.id, cost = item.cost, money = player.money, "bought gear");
    Ok(player.money)
}

/// Sells one fish from the inventory. Returns the amount earned.
pub fn sell(player: &mut PlayerStats, fish_id: Uuid) -> Result<u64, InventoryError> {
    let index = player
        .inventory
        .iter()
        .position(|f| f.id == fish_id)
        .ok_or(InventoryError::FishNotFound(fish_id))?;
    let fish = player.inventory.remove(index);
    player.money += fish.value;
    tracing::info!(fish = fish.name(), value = fish.value, money = player.money, "sold fish");
    Ok(fish.value)
}
