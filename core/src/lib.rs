//! Reference data and shared types for the C-NEX carbon accounting engine.
//!
//! This crate holds the closed reference tables (emission factors, land
//! cover carbon stock profiles, credit market price bands), the shared
//! conversion constants and the engine-wide error taxonomy. Everything is
//! `'static` and immutable after load; the calculators in the sibling
//! crate are pure functions over this data.

pub mod constants;
pub mod credit_market;
pub mod emission_factor;
pub mod error;
pub mod land_cover;

pub use credit_market::{
    list_price_standards, price_standard, standards_for, CreditMarketStandard, MarketKey,
    PriceRange, StandardKey, DEFAULT_PRICE_BAND,
};
pub use emission_factor::{
    emission_factor, list_emission_factors, ActivityKey, EmissionFactor, PeriodUnit,
};
pub use error::{EngineError, EngineResult};
pub use land_cover::{
    land_cover_type, list_land_cover_types, CarbonPools, LandCoverKey, LandCoverType,
};

/// Check every invariant of the shipped reference tables: non-negative
/// emission factors, pool sums matching declared totals, ordered price
/// bands. Call once at startup; the tables cannot change afterwards.
pub fn validate_reference_data() -> EngineResult<()> {
    emission_factor::validate()?;
    land_cover::validate()?;
    credit_market::validate()?;
    log::info!(
        "reference data validated: {} emission factors, {} land cover types, {} price standards",
        list_emission_factors().len(),
        list_land_cover_types().len(),
        list_price_standards().len(),
    );
    Ok(())
}
