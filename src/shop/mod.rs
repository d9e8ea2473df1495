//! Dockside shop: gear catalog, player wallet and inventory, buy/sell.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
