//! Fishing state machine.
//!
//! Phases advance in two places each tick: [`process_trigger`] handles the
//! cast/reel press, then [`advance_phase`] runs the bobber flight and the
//! bite countdowns. A phase with a countdown moves on once it reaches zero.

use super::generation::{roll_bite_delay, roll_cast_velocity, select_fish};
use super::types::{Fish, FishingPhase};
use crate::core::constants::{BITE_WINDOW_TICKS, CAST_OFFSET_X, CAST_OFFSET_Y, WATER_Y};
use crate::core::game_state::{Bobber, SimulationState};
use crate::motion;
use crate::shop::Equipment;
use rand::Rng;

/// A fishing transition, reported so the caller can react to it.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingEvent {
    /// Line thrown; bobber in flight.
    CastStarted { x: f64, y: f64 },
    /// Bobber touched the water and the bite countdown began.
    BobberLanded { x: f64, wait_ticks: f64 },
    /// A fish is on the line.
    FishBiting,
    /// The bite window closed without a reel.
    FishEscaped,
    /// Reeled in while still waiting for a bite.
    ReeledTooEarly,
    /// Reeled in during the bite window.
    FishCaught(Fish),
}

/// Launches the bobber from the boat. Only valid with the line in.
pub fn start_cast(sim: &mut SimulationState, rng: &mut impl Rng) -> Option<FishingEvent> {
    if !sim.phase.can_cast() {
        return None;
    }
    let (vx, vy) = roll_cast_velocity(rng);
    sim.bobber = Bobber {
        x: sim.player_x + CAST_OFFSET_X,
        y: WATER_Y + CAST_OFFSET_Y,
        vx,
        vy,
        active: true,
    };
    sim.phase = FishingPhase::CastingInFlight;
    tracing::debug!(x = sim.bobber.x, vx, vy, "cast started");
    Some(FishingEvent::CastStarted {
        x: sim.bobber.x,
        y: sim.bobber.y,
    })
}

/// Pulls the line back in and returns to Idle.
fn reel_in(sim: &mut SimulationState) {
    sim.bobber.active = false;
    sim.bobber.vx = 0.0;
    sim.bobber.vy = 0.0;
    sim.phase = FishingPhase::Idle;
}

/// Handles one cast/reel press.
///
/// The press is ignored while the bobber is still in the air.
pub fn process_trigger(
    sim: &mut SimulationState,
    equipment: &Equipment,
    rng: &mut impl Rng,
) -> Option<FishingEvent> {
    match sim.phase {
        FishingPhase::Idle | FishingPhase::Moving => start_cast(sim, rng),
        FishingPhase::CastingInFlight => None,
        FishingPhase::WaitingForBite { .. } => {
            reel_in(sim);
            tracing::debug!("reeled in before a bite");
            Some(FishingEvent::ReeledTooEarly)
        }
        FishingPhase::BiteWindow { .. } => {
            let fish = select_fish(equipment.rod_tier, rng);
            reel_in(sim);
            Some(FishingEvent::FishCaught(fish))
        }
    }
}

/// Runs the time-driven part of the machine for one tick.
pub fn advance_phase(
    sim: &mut SimulationState,
    equipment: &Equipment,
    rng: &mut impl Rng,
) -> Option<FishingEvent> {
    match sim.phase {
        FishingPhase::CastingInFlight => {
            if !motion::step_bobber(&mut sim.bobber) {
                return None;
            }
            sim.bobber.y = WATER_Y;
            sim.bobber.vx = 0.0;
            sim.bobber.vy = 0.0;
            let wait_ticks = roll_bite_delay(equipment.bait_tier, rng);
            sim.phase = FishingPhase::WaitingForBite {
                remaining_ticks: wait_ticks,
            };
            tracing::debug!(x = sim.bobber.x, wait_ticks, "bobber landed");
            Some(FishingEvent::BobberLanded {
                x: sim.bobber.x,
                wait_ticks,
            })
        }
        FishingPhase::WaitingForBite { remaining_ticks } => {
            let remaining_ticks = remaining_ticks - 1.0;
            if remaining_ticks <= 0.0 {
                sim.phase = FishingPhase::BiteWindow {
                    remaining_ticks: BITE_WINDOW_TICKS,
                };
                tracing::debug!("fish biting");
                Some(FishingEvent::FishBiting)
            } else {
                sim.phase = FishingPhase::WaitingForBite { remaining_ticks };
                None
            }
        }
        FishingPhase::BiteWindow { remaining_ticks } => {
            let remaining_ticks = remaining_ticks - 1.0;
            if remaining_ticks <= 0.0 {
                reel_in(sim);
                tracing::debug!("fish escaped");
                Some(FishingEvent::FishEscaped)
            } else {
                sim.phase = FishingPhase::BiteWindow { remaining_ticks };
                None
            }
        }
        FishingPhase::Idle | FishingPhase::Moving => None,
    }
}
