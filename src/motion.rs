//! Boat, camera and bobber kinematics.
//!
//! All units are world units per tick. Nothing here touches the fishing
//! phase except [`update_rowing_phase`], which toggles Idle/Moving.

use crate::core::constants::{
    BOAT_SPEED_PER_TIER, BOBBER_GRAVITY, CAMERA_SMOOTHING, MOVING_STOP_VELOCITY, PLAYER_MAX_X,
    PLAYER_MIN_X, ROW_ACCELERATION, ROW_FRICTION, VIEWPORT_WIDTH, WATER_Y,
};
use crate::core::game_state::{Bobber, SimulationState};
use crate::fishing::FishingPhase;
use crate::input::RowDirection;

/// Applies the rowing impulse for this tick. Returns true if any direction is held.
pub fn apply_rowing(sim: &mut SimulationState, direction: RowDirection) -> bool {
    match direction {
        RowDirection::None => false,
        RowDirection::Left => {
            sim.player_vel -= ROW_ACCELERATION;
            true
        }
        RowDirection::Right => {
            sim.player_vel += ROW_ACCELERATION;
            true
        }
        // Opposite impulses cancel, but the boat still counts as rowing.
        RowDirection::Both => true,
    }
}

/// Moves between Idle and Moving. Other phases are left alone.
pub fn update_rowing_phase(sim: &mut SimulationState, rowing: bool) {
    match sim.phase {
        FishingPhase::Idle if rowing => sim.phase = FishingPhase::Moving,
        FishingPhase::Moving if !rowing && sim.player_vel.abs() < MOVING_STOP_VELOCITY => {
            sim.phase = FishingPhase::Idle;
        }
        _ => {}
    }
}

/// Speed multiplier granted by the boat.
pub fn boat_speed_multiplier(boat_tier: u32) -> f64 {
    1.0 + boat_tier as f64 * BOAT_SPEED_PER_TIER
}

/// Friction, integration and clamping to the river's travel range.
///
/// Hitting either end zeroes the velocity.
pub fn integrate_boat(sim: &mut SimulationState, boat_tier: u32) {
    sim.player_vel *= ROW_FRICTION;
    sim.player_x += sim.player_vel * boat_speed_multiplier(boat_tier);

    if sim.player_x < PLAYER_MIN_X {
        sim.player_x = PLAYER_MIN_X;
        sim.player_vel = 0.0;
    }
    if sim.player_x > PLAYER_MAX_X {
        sim.player_x = PLAYER_MAX_X;
        sim.player_vel = 0.0;
    }
}

/// Eases the camera toward centering the player, never scrolling left of zero.
pub fn update_camera(sim: &mut SimulationState) {
    let target = sim.player_x - VIEWPORT_WIDTH / 2.0;
    sim.camera_x += (target - sim.camera_x) * CAMERA_SMOOTHING;
    if sim.camera_x < 0.0 {
        sim.camera_x = 0.0;
    }
}

/// One ballistic step. Returns true once the bobber reaches the water line.
pub fn step_bobber(bobber: &mut Bobber) -> bool {
    bobber.x += bobber.vx;
    bobber.y += bobber.vy;
    bobber.vy += BOBBER_GRAVITY;
    bobber.y >= WATER_Y
}
