//! Land cover carbon stock reference table, IPCC 2019 figures.
//!
//! Each entry declares the density of the five IPCC carbon pools in
//! tonnes of carbon per hectare, plus the pre-summed total. The declared
//! total must match the pool sum; `validate()` checks this once at data
//! load, the calculators never re-derive it per call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Relative tolerance for the declared-total-vs-pool-sum invariant.
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Closed set of land cover classes with a known carbon stock profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCoverKey {
    TropicalRainforest,
    Mangrove,
    PeatlandForest,
    SecondaryForest,
    Agroforestry,
    RubberPlantation,
    OilPalm,
    Grassland,
    RicePaddy,
}

impl LandCoverKey {
    pub const ALL: [LandCoverKey; 9] = [
        LandCoverKey::TropicalRainforest,
        LandCoverKey::Mangrove,
        LandCoverKey::PeatlandForest,
        LandCoverKey::SecondaryForest,
        LandCoverKey::Agroforestry,
        LandCoverKey::RubberPlantation,
        LandCoverKey::OilPalm,
        LandCoverKey::Grassland,
        LandCoverKey::RicePaddy,
    ];

    /// Position in the table, and therefore in [`LandCoverKey::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            LandCoverKey::TropicalRainforest => 0,
            LandCoverKey::Mangrove => 1,
            LandCoverKey::PeatlandForest => 2,
            LandCoverKey::SecondaryForest => 3,
            LandCoverKey::Agroforestry => 4,
            LandCoverKey::RubberPlantation => 5,
            LandCoverKey::OilPalm => 6,
            LandCoverKey::Grassland => 7,
            LandCoverKey::RicePaddy => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LandCoverKey::TropicalRainforest => "tropical_rainforest",
            LandCoverKey::Mangrove => "mangrove",
            LandCoverKey::PeatlandForest => "peatland_forest",
            LandCoverKey::SecondaryForest => "secondary_forest",
            LandCoverKey::Agroforestry => "agroforestry",
            LandCoverKey::RubberPlantation => "rubber_plantation",
            LandCoverKey::OilPalm => "oil_palm",
            LandCoverKey::Grassland => "grassland",
            LandCoverKey::RicePaddy => "rice_paddy",
        }
    }
}

impl FromStr for LandCoverKey {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        LandCoverKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EngineError::UnknownLandCoverKey(s.to_string()))
    }
}

impl fmt::Display for LandCoverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five IPCC carbon pools. As a table entry the fields are densities
/// in tC/ha; scaled by an area they become absolute stocks in tC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonPools {
    pub aboveground_biomass: f64,
    pub belowground_biomass: f64,
    pub dead_wood: f64,
    pub litter: f64,
    pub soil_organic_carbon: f64,
}

impl CarbonPools {
    pub fn sum(&self) -> f64 {
        self.aboveground_biomass
            + self.belowground_biomass
            + self.dead_wood
            + self.litter
            + self.soil_organic_carbon
    }

    /// Multiply every pool by the same factor (an area in hectares).
    pub fn scaled(&self, factor: f64) -> CarbonPools {
        CarbonPools {
            aboveground_biomass: self.aboveground_biomass * factor,
            belowground_biomass: self.belowground_biomass * factor,
            dead_wood: self.dead_wood * factor,
            litter: self.litter * factor,
            soil_organic_carbon: self.soil_organic_carbon * factor,
        }
    }

    fn all_non_negative(&self) -> bool {
        self.aboveground_biomass >= 0.0
            && self.belowground_biomass >= 0.0
            && self.dead_wood >= 0.0
            && self.litter >= 0.0
            && self.soil_organic_carbon >= 0.0
    }
}

/// Per-hectare carbon stock profile of one land cover class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandCoverType {
    pub key: LandCoverKey,
    pub name: &'static str,
    pub pools: CarbonPools,
    /// Sum of the five pools, tC/ha. Declared rather than derived so the
    /// published IPCC totals stay visible in the table.
    pub total_per_hectare: f64,
    pub description: &'static str,
}

static LAND_COVER_TYPES: [LandCoverType; 9] = [
    LandCoverType {
        key: LandCoverKey::TropicalRainforest,
        name: "Tropical Rainforest",
        pools: CarbonPools {
            aboveground_biomass: 180.0,
            belowground_biomass: 49.0,
            dead_wood: 20.0,
            litter: 5.0,
            soil_organic_carbon: 86.0,
        },
        total_per_hectare: 340.0,
        description: "Primary forest with high biodiversity",
    },
    LandCoverType {
        key: LandCoverKey::Mangrove,
        name: "Mangrove Forest",
        pools: CarbonPools {
            aboveground_biomass: 120.0,
            belowground_biomass: 60.0,
            dead_wood: 15.0,
            litter: 3.0,
            soil_organic_carbon: 386.0,
        },
        total_per_hectare: 584.0,
        description: "Coastal ecosystem with high soil carbon stock",
    },
    LandCoverType {
        key: LandCoverKey::PeatlandForest,
        name: "Peatland Forest",
        pools: CarbonPools {
            aboveground_biomass: 150.0,
            belowground_biomass: 40.0,
            dead_wood: 18.0,
            litter: 4.0,
            soil_organic_carbon: 2000.0,
        },
        total_per_hectare: 2212.0,
        description: "Forest on peatland with very high carbon stock",
    },
    LandCoverType {
        key: LandCoverKey::SecondaryForest,
        name: "Secondary Forest",
        pools: CarbonPools {
            aboveground_biomass: 100.0,
            belowground_biomass: 27.0,
            dead_wood: 10.0,
            litter: 3.0,
            soil_organic_carbon: 70.0,
        },
        total_per_hectare: 210.0,
        description: "Forest that has undergone regeneration",
    },
    LandCoverType {
        key: LandCoverKey::Agroforestry,
        name: "Agroforestry",
        pools: CarbonPools {
            aboveground_biomass: 60.0,
            belowground_biomass: 16.0,
            dead_wood: 5.0,
            litter: 2.0,
            soil_organic_carbon: 60.0,
        },
        total_per_hectare: 143.0,
        description: "Combination of agriculture and forestry",
    },
    LandCoverType {
        key: LandCoverKey::RubberPlantation,
        name: "Rubber Plantation",
        pools: CarbonPools {
            aboveground_biomass: 55.0,
            belowground_biomass: 15.0,
            dead_wood: 3.0,
            litter: 2.0,
            soil_organic_carbon: 45.0,
        },
        total_per_hectare: 120.0,
        description: "Monoculture rubber plantation",
    },
    LandCoverType {
        key: LandCoverKey::OilPalm,
        name: "Oil Palm",
        pools: CarbonPools {
            aboveground_biomass: 40.0,
            belowground_biomass: 11.0,
            dead_wood: 2.0,
            litter: 2.0,
            soil_organic_carbon: 40.0,
        },
        total_per_hectare: 95.0,
        description: "Oil palm plantation",
    },
    LandCoverType {
        key: LandCoverKey::Grassland,
        name: "Grassland",
        pools: CarbonPools {
            aboveground_biomass: 3.0,
            belowground_biomass: 12.0,
            dead_wood: 0.0,
            litter: 1.0,
            soil_organic_carbon: 50.0,
        },
        total_per_hectare: 66.0,
        description: "Natural grassland or savanna",
    },
    LandCoverType {
        key: LandCoverKey::RicePaddy,
        name: "Rice Paddy",
        pools: CarbonPools {
            aboveground_biomass: 2.0,
            belowground_biomass: 1.0,
            dead_wood: 0.0,
            litter: 1.0,
            soil_organic_carbon: 55.0,
        },
        total_per_hectare: 59.0,
        description: "Rice paddy field",
    },
];

/// Look up the stock profile for a registered land cover class.
pub fn land_cover_type(key: LandCoverKey) -> &'static LandCoverType {
    &LAND_COVER_TYPES[key.index()]
}

/// Read-only view of the whole table, for UI population.
pub fn list_land_cover_types() -> &'static [LandCoverType] {
    &LAND_COVER_TYPES
}

pub(crate) fn validate() -> EngineResult<()> {
    for land in &LAND_COVER_TYPES {
        if !land.pools.all_non_negative() {
            return Err(EngineError::InconsistentLandCover {
                key: land.key,
                declared: land.total_per_hectare,
                computed: land.pools.sum(),
            });
        }
        let computed = land.pools.sum();
        let scale = land.total_per_hectare.abs().max(1.0);
        if (computed - land.total_per_hectare).abs() > TOTAL_TOLERANCE * scale {
            return Err(EngineError::InconsistentLandCover {
                key: land.key,
                declared: land.total_per_hectare,
                computed,
            });
        }
    }
    Ok(())
}
