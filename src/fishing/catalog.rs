//! Static fish catalog.
//!
//! Changing entries here changes balance only; [`validate`] guards the
//! invariants the selector relies on.

use super::types::{FishSpecies, Rarity, SpeciesId};

/// Errors in the static catalog. Any of these is a fatal configuration error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("no {0:?} species in the catalog")]
    EmptyPool(Rarity),
    #[error("{0:?} has an inverted weight range")]
    InvalidWeightRange(SpeciesId),
    #[error("{0:?} has a non-positive base value")]
    InvalidBaseValue(SpeciesId),
    #[error("{0:?} can be caught worth nothing")]
    WorthlessAtMinWeight(SpeciesId),
    #[error("{0:?} is listed out of order")]
    OutOfOrder(SpeciesId),
}

/// All species, indexed by `SpeciesId as usize`.
pub static FISH_CATALOG: [FishSpecies; 8] = [
    FishSpecies {
        id: SpeciesId::Minnow,
        name: "Minnow",
        rarity: Rarity::Common,
        base_value: 5.0,
        min_weight: 0.2,
        max_weight: 0.5,
    },
    FishSpecies {
        id: SpeciesId::RiverTrout,
        name: "River Trout",
        rarity: Rarity::Common,
        base_value: 15.0,
        min_weight: 1.0,
        max_weight: 5.0,
    },
    FishSpecies {
        id: SpeciesId::LargemouthBass,
        name: "Largemouth Bass",
        rarity: Rarity::Common,
        base_value: 30.0,
        min_weight: 3.0,
        max_weight: 8.0,
    },
    FishSpecies {
        id: SpeciesId::KingSalmon,
        name: "King Salmon",
        rarity: Rarity::Premium,
        base_value: 60.0,
        min_weight: 5.0,
        max_weight: 15.0,
    },
    FishSpecies {
        id: SpeciesId::GoldenKoi,
        name: "Golden Koi",
        rarity: Rarity::Premium,
        base_value: 120.0,
        min_weight: 2.0,
        max_weight: 6.0,
    },
    FishSpecies {
        id: SpeciesId::GiantCatfish,
        name: "Giant Catfish",
        rarity: Rarity::Premium,
        base_value: 150.0,
        min_weight: 10.0,
        max_weight: 30.0,
    },
    FishSpecies {
        id: SpeciesId::ElectricEel,
        name: "Electric Eel",
        rarity: Rarity::Exotic,
        base_value: 300.0,
        min_weight: 4.0,
        max_weight: 10.0,
    },
    FishSpecies {
        id: SpeciesId::RiverSpirit,
        name: "River Spirit",
        rarity: Rarity::Mythical,
        base_value: 1000.0,
        min_weight: 50.0,
        max_weight: 100.0,
    },
];

/// Looks up a species by id.
pub fn species(id: SpeciesId) -> &'static FishSpecies {
    &FISH_CATALOG[id as usize]
}

/// Returns every species of the given rarity, in catalog order.
pub fn pool(rarity: Rarity) -> Vec<&'static FishSpecies> {
    FISH_CATALOG.iter().filter(|s| s.rarity == rarity).collect()
}

/// Checks catalog invariants. Called once at startup.
pub fn validate() -> Result<(), CatalogError> {
    check(&FISH_CATALOG)
}

fn check(catalog: &[FishSpecies]) -> Result<(), CatalogError> {
    for (index, s) in catalog.iter().enumerate() {
        if s.id as usize != index {
            return Err(CatalogError::OutOfOrder(s.id));
        }
        if s.min_weight > s.max_weight || s.min_weight < 0.0 {
            return Err(CatalogError::InvalidWeightRange(s.id));
        }
        if s.base_value <= 0.0 {
            return Err(CatalogError::InvalidBaseValue(s.id));
        }
        if s.value_for(s.min_weight) == 0 {
            return Err(CatalogError::WorthlessAtMinWeight(s.id));
        }
    }
    // Common is the selector's fallback and must never be empty.
    if !catalog.iter().any(|s| s.rarity == Rarity::Common) {
        return Err(CatalogError::EmptyPool(Rarity::Common));
    }
    Ok(())
}
