//! Physical and market constants shared across the calculators.

/// Mass ratio of CO2 to elemental carbon (44/12, rounded to two decimals
/// as in the IPCC-derived tables this engine ships). Both the footprint
/// and stock calculators convert through this single definition.
pub const CARBON_TO_CO2E: f64 = 3.67;

/// Assumed annual CO2 uptake of one planted tree, in kilograms.
pub const KG_CO2_ABSORBED_PER_TREE_YEAR: f64 = 22.0;

/// Indonesia per-capita emissions baseline, tonnes CO2e per year.
pub const INDONESIA_AVG_TONNES_PER_CAPITA: f64 = 2.3;

/// Global per-capita emissions baseline, tonnes CO2e per year.
pub const GLOBAL_AVG_TONNES_PER_CAPITA: f64 = 4.7;

/// Point-in-time IDR/USD rate, used when the caller supplies no rate of
/// its own. Callers with fresher data should pass an explicit rate.
pub const DEFAULT_IDR_PER_USD: f64 = 15_500.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const KG_PER_TONNE: f64 = 1000.0;
