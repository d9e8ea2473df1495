//! Fish selection and randomized fishing timings.
//!
//! Selection is an ordered list of rarity checks, rarest first, each with its
//! own uniform draw. The first check that passes picks the pool; Common is the
//! fallback when every check fails.

use super::catalog::{self, FISH_CATALOG};
use super::types::{Fish, FishSpecies, Rarity};
use crate::core::constants::{
    BAIT_SPEED_PER_TIER, BITE_DELAY_BASE_TICKS, BITE_DELAY_RANGE_TICKS, CAST_VELOCITY_X_MIN,
    CAST_VELOCITY_X_RANGE, CAST_VELOCITY_Y_MIN, CAST_VELOCITY_Y_RANGE, EXOTIC_CHANCE,
    MYTHICAL_CHANCE, PREMIUM_CHANCE,
};
use chrono::Utc;
use rand::Rng;

/// Rarity checks in evaluation order.
const RARITY_CHECKS: [(Rarity, f64); 3] = [
    (Rarity::Mythical, MYTHICAL_CHANCE),
    (Rarity::Exotic, EXOTIC_CHANCE),
    (Rarity::Premium, PREMIUM_CHANCE),
];

/// Picks a species for the given rod tier.
///
/// A rarity check only draws a number when its rarity is reachable with this
/// rod and its pool is not empty. Tier 1 therefore always lands on Common,
/// and tier 2 never reaches Mythical.
pub fn select_species(rod_tier: u32, rng: &mut impl Rng) -> &'static FishSpecies {
    for (rarity, chance) in RARITY_CHECKS {
        if !rarity.is_reachable(rod_tier) {
            continue;
        }
        let pool = catalog::pool(rarity);
        if pool.is_empty() {
            continue;
        }
        if rng.gen::<f64>() < chance {
            return pick_uniform(&pool, rng);
        }
    }

    let common = catalog::pool(Rarity::Common);
    if common.is_empty() {
        // Unreachable once catalog::validate() has passed.
        tracing::error!("fish catalog has no Common species");
        return &FISH_CATALOG[0];
    }
    pick_uniform(&common, rng)
}

fn pick_uniform(pool: &[&'static FishSpecies], rng: &mut impl Rng) -> &'static FishSpecies {
    pool[rng.gen_range(0..pool.len())]
}

/// Samples a weight uniformly from the species' range.
pub fn roll_weight(species: &FishSpecies, rng: &mut impl Rng) -> f64 {
    species.min_weight + rng.gen::<f64>() * (species.max_weight - species.min_weight)
}

/// Generates a caught fish for the given rod tier.
pub fn select_fish(rod_tier: u32, rng: &mut impl Rng) -> Fish {
    let species = select_species(rod_tier, rng);
    let weight = roll_weight(species, rng);
    Fish::new(species, weight, Utc::now().timestamp_millis())
}

/// Bite delay in ticks for a given bait tier and uniform draw in [0, 1).
///
/// `base + draw * range - bait_tier * factor`, never negative.
pub fn bite_delay_for_draw(bait_tier: u32, draw: f64) -> f64 {
    let delay = BITE_DELAY_BASE_TICKS + draw * BITE_DELAY_RANGE_TICKS
        - bait_tier as f64 * BAIT_SPEED_PER_TIER;
    delay.max(0.0)
}

/// Rolls the number of ticks until a fish bites.
pub fn roll_bite_delay(bait_tier: u32, rng: &mut impl Rng) -> f64 {
    bite_delay_for_draw(bait_tier, rng.gen::<f64>())
}

/// Rolls the bobber's launch velocity: outward (positive x) and upward (negative y).
pub fn roll_cast_velocity(rng: &mut impl Rng) -> (f64, f64) {
    let vx = CAST_VELOCITY_X_MIN + rng.gen::<f64>() * CAST_VELOCITY_X_RANGE;
    let vy = CAST_VELOCITY_Y_MIN - rng.gen::<f64>() * CAST_VELOCITY_Y_RANGE;
    (vx, vy)
}
