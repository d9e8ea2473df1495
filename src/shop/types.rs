//! Shop and player data structures.

use crate::core::constants::STARTING_MONEY;
use crate::fishing::Fish;
use uuid::Uuid;

/// The piece of gear an item upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Rod,
    Bait,
    Boat,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Rod, ItemKind::Bait, ItemKind::Boat];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Rod => "Rod",
            ItemKind::Bait => "Bait",
            ItemKind::Boat => "Boat",
        }
    }
}

/// A purchasable upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub tier: u32,
    pub cost: u64,
    pub description: &'static str,
}

/// Gear tiers. Only ever raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equipment {
    pub rod_tier: u32,
    pub bait_tier: u32,
    pub boat_tier: u32,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            rod_tier: 1,
            bait_tier: 1,
            boat_tier: 1,
        }
    }
}

impl Equipment {
    pub fn tier(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Rod => self.rod_tier,
            ItemKind::Bait => self.bait_tier,
            ItemKind::Boat => self.boat_tier,
        }
    }

    /// Raises the tier for `kind` to at least `tier`.
    pub fn raise(&mut self, kind: ItemKind, tier: u32) {
        let slot = match kind {
            ItemKind::Rod => &mut self.rod_tier,
            ItemKind::Bait => &mut self.bait_tier,
            ItemKind::Boat => &mut self.boat_tier,
        };
        *slot = (*slot).max(tier);
    }
}

/// Wallet, catch inventory and gear.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub money: u64,
    pub inventory: Vec<Fish>,
    pub equipment: Equipment,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            inventory: Vec::new(),
            equipment: Equipment::default(),
        }
    }
}

impl PlayerStats {
    pub fn find_fish(&self, id: Uuid) -> Option<&Fish> {
        self.inventory.iter().find(|f| f.id == id)
    }

    /// Combined sale value of everything in the inventory.
    pub fn inventory_value(&self) -> u64 {
        self.inventory.iter().map(|f| f.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("no shop item with id {0:?}")]
    UnknownItem(String),
    #[error("costs {cost}, you have {money}")]
    InsufficientFunds { cost: u64, money: u64 },
    #[error("already owned")]
    AlreadyOwned,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("fish {0} is not in the inventory")]
    FishNotFound(Uuid),
}
