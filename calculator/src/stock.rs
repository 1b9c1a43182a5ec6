//! Land carbon stock from area and land cover type.

use std::str::FromStr;

use serde::Serialize;

use cnex_core::constants::CARBON_TO_CO2E;
use cnex_core::{
    land_cover_type, price_standard, CarbonPools, EngineError, EngineResult, LandCoverKey,
    MarketKey, PriceRange, DEFAULT_PRICE_BAND,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockResult {
    pub land_cover: LandCoverKey,
    pub area_hectares: f64,
    /// Absolute stock of each pool over the whole area, tonnes carbon.
    pub pools: CarbonPools,
    pub total_tonnes_c: f64,
    pub co2_equivalent_tonnes: f64,
    /// Monetary range for the CO2e at the applied per-tonne band.
    pub credit_value_usd: PriceRange,
}

/// Compute the carbon stock of an area using the global default price
/// band ($5/$12/$20 per tonne CO2e) for the credit value estimate.
///
/// The area is an opaque hectare figure; whether it was typed in or
/// derived from drawn map polygons (summed by the caller) makes no
/// difference here.
pub fn calculate_carbon_stock(land_cover_key: &str, area_hectares: f64) -> EngineResult<StockResult> {
    let key = LandCoverKey::from_str(land_cover_key)?;
    stock_with_band(key, area_hectares, DEFAULT_PRICE_BAND)
}

/// Same computation, but valued at an explicitly selected market and
/// certification standard instead of the default band.
pub fn calculate_carbon_stock_priced(
    land_cover_key: &str,
    area_hectares: f64,
    market: &str,
    standard: &str,
) -> EngineResult<StockResult> {
    let key = LandCoverKey::from_str(land_cover_key)?;
    let market = MarketKey::from_str(market)?;
    let band = price_standard(market, standard)?.band;
    stock_with_band(key, area_hectares, band)
}

fn stock_with_band(
    key: LandCoverKey,
    area_hectares: f64,
    band: PriceRange,
) -> EngineResult<StockResult> {
    if !(area_hectares > 0.0) || !area_hectares.is_finite() {
        return Err(EngineError::InvalidArea(area_hectares));
    }
    let land = land_cover_type(key);

    // Each pool scales independently; the total is their sum, which agrees
    // with total_per_hectare * area within floating point tolerance.
    let pools = land.pools.scaled(area_hectares);
    let total_tonnes_c = pools.sum();
    let co2_equivalent_tonnes = total_tonnes_c * CARBON_TO_CO2E;

    Ok(StockResult {
        land_cover: key,
        area_hectares,
        pools,
        total_tonnes_c,
        co2_equivalent_tonnes,
        credit_value_usd: band.scaled(co2_equivalent_tonnes),
    })
}
