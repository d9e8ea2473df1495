//! Fishing system: catalog, selection, and the cast/bite state machine.

pub mod catalog;
pub mod generation;
pub mod logic;
pub mod types;

pub use catalog::{CatalogError, FISH_CATALOG};
pub use generation::*;
pub use logic::*;
pub use types::*;
