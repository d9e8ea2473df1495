//! Per-tick orchestration.
//!
//! `game_tick()` advances the simulation by one fixed step and reports what
//! happened as a list of [`TickEvent`]s. The caller owns everything outside
//! the simulation: rendering, the catch card, lore requests, the shop.

use super::constants::{
    LANDING_SPLASH_COUNT, ROWING_SPLASH_CHANCE, ROWING_SPLASH_COUNT, ROWING_SPLASH_OFFSET_X,
    WATER_Y,
};
use super::game_state::GameState;
use crate::effects::ParticleKind;
use crate::fishing::{self, Fish, FishingEvent};
use crate::input::{Action, InputState};
use crate::motion;
use rand::Rng;

/// Something a tick produced that the front-end may react to.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Fishing ─────────────────────────────────────────────────
    CastStarted,
    BobberLanded { x: f64, wait_ticks: f64 },
    FishBiting,
    FishEscaped,
    ReeledTooEarly,
    /// Reeled in during the bite window. Not yet in the inventory.
    FishCaught { fish: Fish },

    // ── Effects ─────────────────────────────────────────────────
    /// Particles were spawned at a point.
    Splash { x: f64, count: usize },

    // ── Shop ────────────────────────────────────────────────────
    /// The player asked to open the shop while in range.
    ShopRequested,
}

impl From<FishingEvent> for TickEvent {
    fn from(event: FishingEvent) -> Self {
        match event {
            FishingEvent::CastStarted { .. } => TickEvent::CastStarted,
            FishingEvent::BobberLanded { x, wait_ticks } => TickEvent::BobberLanded { x, wait_ticks },
            FishingEvent::FishBiting => TickEvent::FishBiting,
            FishingEvent::FishEscaped => TickEvent::FishEscaped,
            FishingEvent::ReeledTooEarly => TickEvent::ReeledTooEarly,
            FishingEvent::FishCaught(fish) => TickEvent::FishCaught { fish },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    /// The fish caught this tick, if any.
    pub fn caught_fish(&self) -> Option<&Fish> {
        self.events.iter().find_map(|e| match e {
            TickEvent::FishCaught { fish } => Some(fish),
            _ => None,
        })
    }

    pub fn shop_requested(&self) -> bool {
        self.events.contains(&TickEvent::ShopRequested)
    }
}

/// Advances the game by one tick.
///
/// Order within a tick:
/// 1. Rowing input and the Idle/Moving toggle (line in only)
/// 2. Shop request
/// 3. Boat physics and camera
/// 4. Cast/reel trigger
/// 5. Bobber flight and bite timers
/// 6. Particles
pub fn game_tick(state: &mut GameState, input: &InputState, rng: &mut impl Rng) -> TickResult {
    let mut result = TickResult::default();
    let sim = &mut state.sim;
    let equipment = state.player.equipment;
    sim.tick_count += 1;

    // 1. Rowing
    if sim.phase.can_cast() {
        let rowing = motion::apply_rowing(sim, input.row_direction());
        motion::update_rowing_phase(sim, rowing);
        if rowing && rng.gen::<f64>() < ROWING_SPLASH_CHANCE {
            let x = sim.player_x + ROWING_SPLASH_OFFSET_X;
            state
                .particles
                .emit(x, WATER_Y, ROWING_SPLASH_COUNT, ParticleKind::Wake, rng);
            result.events.push(TickEvent::Splash {
                x,
                count: ROWING_SPLASH_COUNT,
            });
        }

        // 2. Shop
        if input.is_pressed(Action::OpenShop) && crate::shop::near_shop(sim.player_x) {
            result.events.push(TickEvent::ShopRequested);
        }
    }

    // 3. Physics
    motion::integrate_boat(sim, equipment.boat_tier);
    motion::update_camera(sim);

    // 4. Trigger
    if state.cast_latch.fire(input.is_pressed(Action::CastReel)) {
        if let Some(event) = fishing::process_trigger(sim, &equipment, rng) {
            result.events.push(event.into());
        }
    }

    // 5. Flight and timers
    if let Some(event) = fishing::advance_phase(sim, &equipment, rng) {
        if let FishingEvent::BobberLanded { x, .. } = event {
            state
                .particles
                .emit(x, WATER_Y, LANDING_SPLASH_COUNT, ParticleKind::Splash, rng);
            result.events.push(TickEvent::Splash {
                x,
                count: LANDING_SPLASH_COUNT,
            });
        }
        result.events.push(event.into());
    }

    // 6. Particles
    state.particles.update();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{PLAYER_START_X, ROW_ACCELERATION};
    use crate::fishing::FishingPhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        let result = game_tick(&mut state, &InputState::new(), &mut rng);
        assert!(result.events.is_empty());
        assert_eq!(state.sim.phase, FishingPhase::Idle);
        assert_eq!(state.sim.player_x, PLAYER_START_X);
        assert_eq!(state.sim.tick_count, 1);
    }

    #[test]
    fn test_rowing_moves_boat() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        game_tick(&mut state, &input, &mut rng);
        assert_eq!(state.sim.phase, FishingPhase::Moving);
        assert!(state.sim.player_x > PLAYER_START_X);
        assert!((state.sim.player_vel - ROW_ACCELERATION * 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_rowing_ignored_with_line_out() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        state.sim.phase = FishingPhase::WaitingForBite {
            remaining_ticks: 500.0,
        };
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        for _ in 0..10 {
            game_tick(&mut state, &input, &mut rng);
        }
        assert_eq!(state.sim.player_vel, 0.0);
        assert_eq!(state.sim.player_x, PLAYER_START_X);
    }

    #[test]
    fn test_held_trigger_casts_once() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        let mut input = InputState::new();
        input.press(Action::CastReel);
        let casts = (0..100)
            .flat_map(|_| game_tick(&mut state, &input, &mut rng).events)
            .filter(|e| *e == TickEvent::CastStarted)
            .count();
        assert_eq!(casts, 1);
        // Still holding: the press must not reel in once the bobber lands.
        assert!(state.sim.phase.line_out());
    }

    #[test]
    fn test_landing_emits_one_splash() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        let mut input = InputState::new();
        input.press(Action::CastReel);
        let mut events = Vec::new();
        for _ in 0..100 {
            events.extend(game_tick(&mut state, &input, &mut rng).events);
        }
        let splashes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, TickEvent::Splash { .. }))
            .collect();
        assert_eq!(splashes.len(), 1);
        assert!(matches!(
            splashes[0],
            TickEvent::Splash { count, .. } if *count == LANDING_SPLASH_COUNT
        ));
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::BobberLanded { .. })));
    }

    #[test]
    fn test_reel_on_last_bite_tick_succeeds() {
        let mut rng = create_test_rng();
        let mut state = GameState::new();
        state.sim.phase = FishingPhase::BiteWindow {
            remaining_ticks: 1.0,
        };
        state.sim.bobber.active = true;
        let mut input = InputState::new();
        input.press(Action::CastReel);
        let result = game_tick(&mut state, &input, &mut rng);
        assert!(result.caught_fish().is_some());
        assert_eq!(state.sim.phase, FishingPhase::Idle);
    }

    #[test]
    fn test_shop_request_only_near_dock() {
        let mut rng = create_test_rng();
        let mut input = InputState::new();
        input.press(Action::OpenShop);

        let mut far = GameState::new();
        assert!(!game_tick(&mut far, &input, &mut rng).shop_requested());

        let mut near = GameState::new();
        near.sim.player_x = 100.0;
        assert!(game_tick(&mut near, &input, &mut rng).shop_requested());

        let mut busy = GameState::new();
        busy.sim.player_x = 100.0;
        busy.sim.phase = FishingPhase::CastingInFlight;
        assert!(!game_tick(&mut busy, &input, &mut rng).shop_requested());
    }
}
