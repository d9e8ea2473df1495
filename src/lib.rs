//! River Legends - Terminal-Based Fishing Game Library
//!
//! This module exposes the simulation for testing and external use.

pub mod config;
pub mod core;
pub mod effects;
pub mod fishing;
pub mod input;
pub mod lore;
pub mod motion;
pub mod shop;
pub mod utils;

// UI lives in the binary
