//! Core game state and per-tick orchestration.

pub mod catch;
pub mod constants;
pub mod game_state;
pub mod tick;

pub use catch::*;
pub use constants::*;
pub use game_state::*;
pub use tick::*;
