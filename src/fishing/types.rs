//! Fishing data structures.
//!
//! Species are static catalog entries; a [`Fish`] is a concrete catch with a
//! sampled weight. [`FishingPhase`] is the tag of the fishing state machine,
//! with the countdown carried only by the variants that use it.

use uuid::Uuid;

/// Rarity tiers for fish, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common = 0,
    Premium = 1,
    Exotic = 2,
    Mythical = 3,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Premium => "Premium",
            Rarity::Exotic => "Exotic",
            Rarity::Mythical => "Mythical",
        }
    }

    /// Lowest rod tier that can hook a fish of this rarity.
    pub fn min_rod_tier(&self) -> u32 {
        use crate::core::constants::{
            EXOTIC_MIN_ROD_TIER, MYTHICAL_MIN_ROD_TIER, PREMIUM_MIN_ROD_TIER,
        };
        match self {
            Rarity::Common => 1,
            Rarity::Premium => PREMIUM_MIN_ROD_TIER,
            Rarity::Exotic => EXOTIC_MIN_ROD_TIER,
            Rarity::Mythical => MYTHICAL_MIN_ROD_TIER,
        }
    }

    pub fn is_reachable(&self, rod_tier: u32) -> bool {
        rod_tier >= self.min_rod_tier()
    }
}

/// Identifier of a catalog species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesId {
    Minnow,
    RiverTrout,
    LargemouthBass,
    KingSalmon,
    GoldenKoi,
    GiantCatfish,
    ElectricEel,
    RiverSpirit,
}

/// Static description of a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpecies {
    pub id: SpeciesId,
    pub name: &'static str,
    pub rarity: Rarity,
    /// Currency per unit of weight.
    pub base_value: f64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl FishSpecies {
    /// Sale value of a fish of this species at the given weight.
    pub fn value_for(&self, weight: f64) -> u64 {
        (self.base_value * weight).floor().max(0.0) as u64
    }

    pub fn weight_in_range(&self, weight: f64) -> bool {
        weight >= self.min_weight && weight <= self.max_weight
    }
}

/// A caught fish. Everything is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub id: Uuid,
    pub species: SpeciesId,
    pub rarity: Rarity,
    pub weight: f64,
    pub value: u64,
    /// Unix timestamp in milliseconds.
    pub caught_at: i64,
}

impl Fish {
    /// Creates a fish of `species` weighing `weight`, valued from the species' base value.
    pub fn new(species: &FishSpecies, weight: f64, caught_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            species: species.id,
            rarity: species.rarity,
            weight,
            value: species.value_for(weight),
            caught_at,
        }
    }

    pub fn name(&self) -> &'static str {
        crate::fishing::catalog::species(self.species).name
    }
}

/// Current phase of the fishing sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FishingPhase {
    /// Boat at rest, line in.
    Idle,
    /// Rowing, line in.
    Moving,
    /// Bobber flying toward the water.
    CastingInFlight,
    /// Bobber floating, counting down to a bite.
    WaitingForBite { remaining_ticks: f64 },
    /// A fish is on; reel before the window closes.
    BiteWindow { remaining_ticks: f64 },
}

impl FishingPhase {
    /// True when a cast may start.
    pub fn can_cast(&self) -> bool {
        matches!(self, FishingPhase::Idle | FishingPhase::Moving)
    }

    /// True while the line is out (bobber active).
    pub fn line_out(&self) -> bool {
        !self.can_cast()
    }

    pub fn remaining_ticks(&self) -> Option<f64> {
        match self {
            FishingPhase::WaitingForBite { remaining_ticks }
            | FishingPhase::BiteWindow { remaining_ticks } => Some(*remaining_ticks),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FishingPhase::Idle => "Idle",
            FishingPhase::Moving => "Rowing",
            FishingPhase::CastingInFlight => "Casting",
            FishingPhase::WaitingForBite { .. } => "Waiting",
            FishingPhase::BiteWindow { .. } => "Bite!",
        }
    }
}
