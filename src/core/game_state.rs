//! Game state: simulation, player, particles, cast latch and fish lore.

use super::constants::{PLAYER_START_X, WATER_Y};
use crate::effects::ParticleSystem;
use crate::fishing::FishingPhase;
use crate::input::TriggerLatch;
use crate::lore::LoreBook;
use crate::shop::PlayerStats;

/// The float on the end of the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bobber {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Drawn and simulated only while active.
    pub active: bool,
}

impl Default for Bobber {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: WATER_Y,
            vx: 0.0,
            vy: 0.0,
            active: false,
        }
    }
}

/// Mutable world state advanced by every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub player_x: f64,
    pub player_vel: f64,
    pub camera_x: f64,
    pub bobber: Bobber,
    pub phase: FishingPhase,
    /// Ticks simulated so far. Drives the water animation.
    pub tick_count: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            player_x: PLAYER_START_X,
            player_vel: 0.0,
            camera_x: 0.0,
            bobber: Bobber::default(),
            phase: FishingPhase::Idle,
            tick_count: 0,
        }
    }
}

impl SimulationState {
    /// Player x relative to the left edge of the viewport.
    pub fn player_screen_x(&self) -> f64 {
        self.player_x - self.camera_x
    }
}

/// Everything one game session owns.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub sim: SimulationState,
    pub player: PlayerStats,
    pub particles: ParticleSystem,
    pub cast_latch: TriggerLatch,
    /// Lore received for caught fish.
    pub lore: LoreBook,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player with the line in and close enough to the dock to trade.
    pub fn can_open_shop(&self) -> bool {
        self.sim.phase.can_cast() && crate::shop::near_shop(self.sim.player_x)
    }
}
