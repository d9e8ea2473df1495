//! Shop and economy integration tests
//!
//! Covers the loop of catching, selling and upgrading:
//! - Opening the shop from the dock
//! - Selling caught fish
//! - Buying gear and its effect on the river

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use river::core::{game_tick, handle_catch, sell_fish, GameState};
use river::fishing::{catalog, select_fish, Fish, Rarity, SpeciesId};
use river::input::{Action, InputState};
use river::lore::{LoreRequest, LoreRequester};
use river::shop::{self, InventoryError, ItemKind, ShopError, SHOP_CATALOG};
use std::cell::RefCell;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Counts lore requests instead of sending them anywhere.
#[derive(Default)]
struct CountingRequester {
    requests: RefCell<Vec<LoreRequest>>,
}

impl LoreRequester for CountingRequester {
    fn request_lore(&self, request: LoreRequest) {
        self.requests.borrow_mut().push(request);
    }
}

fn fish_of(id: SpeciesId, weight: f64) -> Fish {
    Fish::new(catalog::species(id), weight, 0)
}

fn shop_input() -> InputState {
    let mut input = InputState::new();
    input.press(Action::OpenShop);
    input
}

// ============================================================================
// Dock Access
// ============================================================================

#[test]
fn test_shop_opens_at_dock_only() {
    let mut rng = create_test_rng();
    let mut state = GameState::new();

    // Start position is past the dock
    let result = game_tick(&mut state, &shop_input(), &mut rng);
    assert!(!result.shop_requested());

    state.sim.player_x = 100.0;
    let result = game_tick(&mut state, &shop_input(), &mut rng);
    assert!(result.shop_requested());
}

#[test]
fn test_rowing_to_dock_reaches_shop() {
    let mut rng = create_test_rng();
    let mut state = GameState::new();
    let mut input = InputState::new();
    input.press(Action::MoveLeft);

    for _ in 0..200 {
        game_tick(&mut state, &input, &mut rng);
    }
    assert!(state.can_open_shop());
    assert_eq!(state.sim.player_x, river::core::PLAYER_MIN_X);
}

#[test]
fn test_shop_closed_while_fishing() {
    let mut rng = create_test_rng();
    let mut state = GameState::new();
    state.sim.player_x = 100.0;

    let mut cast = InputState::new();
    cast.press(Action::CastReel);
    game_tick(&mut state, &cast, &mut rng);
    assert!(state.sim.phase.line_out());

    let result = game_tick(&mut state, &shop_input(), &mut rng);
    assert!(!result.shop_requested());
    assert!(!state.can_open_shop());
}

// ============================================================================
// Selling
// ============================================================================

#[test]
fn test_catch_then_sell_pays_fish_value() {
    let mut state = GameState::new();
    let requester = CountingRequester::default();
    let salmon = fish_of(SpeciesId::KingSalmon, 10.0);
    let trout = fish_of(SpeciesId::RiverTrout, 2.0);

    handle_catch(&mut state, salmon.clone(), &requester);
    handle_catch(&mut state, trout.clone(), &requester);
    assert_eq!(state.player.inventory.len(), 2);
    assert_eq!(state.player.inventory_value(), 600 + 30);
    // Only the premium fish gets lore
    assert_eq!(requester.requests.borrow().len(), 1);
    assert_eq!(requester.requests.borrow()[0].fish_id, salmon.id);

    assert_eq!(sell_fish(&mut state, salmon.id), Ok(600));
    assert_eq!(state.player.money, 600);
    assert_eq!(state.player.inventory, vec![trout]);
}

#[test]
fn test_selling_forgets_lore() {
    let mut state = GameState::new();
    let requester = CountingRequester::default();
    let koi = fish_of(SpeciesId::GoldenKoi, 3.0);
    handle_catch(&mut state, koi.clone(), &requester);
    state.lore.record(koi.id, "It glows at dusk.".to_string());

    sell_fish(&mut state, koi.id).expect("in inventory");
    assert!(state.lore.get(koi.id).is_none());
    assert_eq!(
        sell_fish(&mut state, koi.id),
        Err(InventoryError::FishNotFound(koi.id))
    );
}

// ============================================================================
// Buying
// ============================================================================

#[test]
fn test_sell_then_upgrade_rod() {
    let mut state = GameState::new();
    let requester = CountingRequester::default();
    let catfish = fish_of(SpeciesId::GiantCatfish, 10.0);
    handle_catch(&mut state, catfish.clone(), &requester);

    assert_eq!(
        shop::buy(&mut state.player, "rod_3"),
        Err(ShopError::InsufficientFunds {
            cost: 1000,
            money: 0
        })
    );

    sell_fish(&mut state, catfish.id).expect("in inventory");
    assert_eq!(state.player.money, 1500);
    assert_eq!(shop::buy(&mut state.player, "rod_3"), Ok(500));
    assert_eq!(state.player.equipment.rod_tier, 3);

    // Lower tier of the same gear is already covered
    assert_eq!(
        shop::buy(&mut state.player, "rod_2"),
        Err(ShopError::AlreadyOwned)
    );
    assert_eq!(state.player.money, 500);
    assert_eq!(shop::buy(&mut state.player, "boat_2"), Ok(0));
    assert_eq!(state.player.equipment.tier(ItemKind::Boat), 2);
}

#[test]
fn test_buying_everything_costs_catalog_total() {
    let mut state = GameState::new();
    let total: u64 = SHOP_CATALOG.iter().map(|item| item.cost).sum();
    state.player.money = total;

    for item in SHOP_CATALOG.iter() {
        shop::buy(&mut state.player, item.id).expect("affordable");
    }
    assert_eq!(state.player.money, 0);
    for kind in ItemKind::ALL {
        assert_eq!(state.player.equipment.tier(kind), shop::max_tier(kind));
    }
}

#[test]
fn test_rod_upgrade_unlocks_rarer_fish() {
    let mut rng = create_test_rng();
    let mut state = GameState::new();

    let stock: Vec<Rarity> = (0..500)
        .map(|_| select_fish(state.player.equipment.rod_tier, &mut rng).rarity)
        .collect();
    assert!(stock.iter().all(|r| *r == Rarity::Common));

    state.player.money = 1000;
    shop::buy(&mut state.player, "rod_3").expect("affordable");
    let upgraded: Vec<Rarity> = (0..2000)
        .map(|_| select_fish(state.player.equipment.rod_tier, &mut rng).rarity)
        .collect();
    assert!(upgraded.contains(&Rarity::Premium));
    assert!(upgraded.contains(&Rarity::Exotic));
    assert!(upgraded.contains(&Rarity::Mythical));
}
