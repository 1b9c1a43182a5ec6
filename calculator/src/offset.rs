//! Offset planning: how many credits, at what cost, over what area.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cnex_core::constants::CARBON_TO_CO2E;
use cnex_core::{land_cover_type, EngineError, EngineResult, LandCoverKey};

/// Offset project category, priced per credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetProjectType {
    Reforestation,
    RenewableEnergy,
    BlueCarbon,
}

impl OffsetProjectType {
    pub fn cost_per_credit_usd(self) -> f64 {
        match self {
            OffsetProjectType::Reforestation => 15.0,
            OffsetProjectType::RenewableEnergy => 20.0,
            OffsetProjectType::BlueCarbon => 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetPlan {
    pub annual_emission_tonnes: f64,
    pub offset_target_percent: f64,
    pub project: OffsetProjectType,
    pub land_cover: LandCoverKey,
    pub emission_to_offset_tonnes: f64,
    /// One credit retires one tonne CO2e.
    pub credits_needed: f64,
    pub total_cost_usd: f64,
    /// Hectares of the chosen land cover whose stock matches the target.
    pub area_needed_hectares: f64,
}

/// Plan an offset: the share of annual emissions to cover, the credits
/// and budget that takes, and the equivalent area of the chosen land
/// cover type.
pub fn plan_offset(
    annual_emission_tonnes: f64,
    offset_target_percent: f64,
    project: OffsetProjectType,
    land_cover_key: &str,
) -> EngineResult<OffsetPlan> {
    if !(annual_emission_tonnes >= 0.0) || !annual_emission_tonnes.is_finite() {
        return Err(EngineError::InvalidTonnage(annual_emission_tonnes));
    }
    if !(0.0..=100.0).contains(&offset_target_percent) || !offset_target_percent.is_finite() {
        return Err(EngineError::InvalidPercentage(offset_target_percent));
    }
    let land_cover = LandCoverKey::from_str(land_cover_key)?;
    let land = land_cover_type(land_cover);

    let emission_to_offset_tonnes = annual_emission_tonnes * offset_target_percent / 100.0;
    let credits_needed = emission_to_offset_tonnes;
    let total_cost_usd = credits_needed * project.cost_per_credit_usd();
    let area_needed_hectares =
        emission_to_offset_tonnes / CARBON_TO_CO2E / land.total_per_hectare;

    Ok(OffsetPlan {
        annual_emission_tonnes,
        offset_target_percent,
        project,
        land_cover,
        emission_to_offset_tonnes,
        credits_needed,
        total_cost_usd,
        area_needed_hectares,
    })
}
