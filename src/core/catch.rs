//! What happens to a fish once it is reeled in.

use super::game_state::GameState;
use crate::fishing::Fish;
use crate::lore::{self, LoreRequest, LoreRequester, LoreUpdate};
use crate::shop::{self, InventoryError};
use uuid::Uuid;

/// A catch ready to be shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchRecord {
    pub fish: Fish,
    /// True if lore was requested and may still be on its way.
    pub lore_requested: bool,
}

/// Adds a caught fish to the inventory and asks for lore when it is rare enough.
pub fn handle_catch(
    state: &mut GameState,
    fish: Fish,
    requester: &impl LoreRequester,
) -> CatchRecord {
    tracing::info!(
        fish = fish.name(),
        rarity = fish.rarity.name(),
        weight = fish.weight,
        value = fish.value,
        "fish caught"
    );
    let lore_requested = lore::wants_lore(fish.rarity);
    if lore_requested {
        requester.request_lore(LoreRequest::for_fish(&fish));
    }
    state.player.inventory.push(fish.clone());
    CatchRecord {
        fish,
        lore_requested,
    }
}

/// Stores a lore reply against the fish it was requested for. Replies for
/// fish no longer in the inventory are dropped.
///
/// Returns the chat reply text for shop replies, which are not stored here.
pub fn apply_lore_update(state: &mut GameState, update: LoreUpdate) -> Option<String> {
    match update {
        LoreUpdate::FishLore { fish_id, text } => {
            if state.player.find_fish(fish_id).is_some() {
                state.lore.record(fish_id, text);
            } else {
                tracing::debug!(%fish_id, "lore for a fish no longer held");
            }
            None
        }
        LoreUpdate::ShopReply { text } => Some(text),
    }
}

/// Sells a fish and forgets its lore. Returns the amount earned.
pub fn sell_fish(state: &mut GameState, fish_id: Uuid) -> Result<u64, InventoryError> {
    let earned = shop::sell(&mut state.player, fish_id)?;
    state.lore.remove(fish_id);
    Ok(earned)
}
