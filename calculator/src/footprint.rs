//! Annual carbon footprint from activity quantities.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cnex_core::constants::{
    GLOBAL_AVG_TONNES_PER_CAPITA, INDONESIA_AVG_TONNES_PER_CAPITA, KG_CO2_ABSORBED_PER_TREE_YEAR,
    KG_PER_TONNE,
};
use cnex_core::{emission_factor, ActivityKey, EngineError, EngineResult};

/// Qualitative classification of an annual footprint. Band edges are
/// inclusive on the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SeverityLevel {
    /// <2 Low, [2,5) Medium, [5,10) High, >=10 Very High.
    pub fn from_tonnes(total_tonnes: f64) -> SeverityLevel {
        if total_tonnes < 2.0 {
            SeverityLevel::Low
        } else if total_tonnes < 5.0 {
            SeverityLevel::Medium
        } else if total_tonnes < 10.0 {
            SeverityLevel::High
        } else {
            SeverityLevel::VeryHigh
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
            SeverityLevel::VeryHigh => "Very High",
        })
    }
}

/// One supplied activity's contribution to the annual total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityEmission {
    pub activity: ActivityKey,
    /// Quantity as supplied by the caller, in the factor's reporting unit.
    pub quantity: f64,
    pub annual_tonnes_co2e: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintResult {
    pub total_tonnes_co2e_per_year: f64,
    pub severity: SeverityLevel,
    /// Positive means above the Indonesian per-capita average.
    pub delta_vs_national: f64,
    /// Positive means above the global per-capita average.
    pub delta_vs_global: f64,
    /// Trees that would absorb the total in one year, rounded up.
    pub trees_needed: u64,
    /// Supplied activities in reference-table order.
    pub breakdown: Vec<ActivityEmission>,
}

/// Compute the annual CO2e footprint of the supplied activity quantities.
///
/// Unknown keys are ignored so partial input forms can submit whatever
/// they have; negative (or non-finite) quantities on known activities are
/// rejected before anything is computed. Monthly-period factors annualize
/// the quantity by 12, yearly factors apply directly. Accumulation runs in
/// `ActivityKey::ALL` order, so identical inputs give identical results
/// whatever the map's own iteration order.
pub fn calculate_footprint(activities: &HashMap<String, f64>) -> EngineResult<FootprintResult> {
    for key in activities.keys() {
        if ActivityKey::from_str(key).is_err() {
            log::debug!("ignoring unknown activity key `{key}`");
        }
    }
    for key in ActivityKey::ALL {
        if let Some(&quantity) = activities.get(key.as_str()) {
            if !(quantity >= 0.0) || !quantity.is_finite() {
                return Err(EngineError::InvalidQuantity {
                    activity: key,
                    value: quantity,
                });
            }
        }
    }

    let mut breakdown = Vec::new();
    let mut total_tonnes = 0.0;
    for key in ActivityKey::ALL {
        let Some(&quantity) = activities.get(key.as_str()) else {
            continue;
        };
        let factor = emission_factor(key);
        let annual_kg = factor.period.annualize(quantity) * factor.factor_kg_co2e_per_unit;
        let annual_tonnes = annual_kg / KG_PER_TONNE;
        total_tonnes += annual_tonnes;
        breakdown.push(ActivityEmission {
            activity: key,
            quantity,
            annual_tonnes_co2e: annual_tonnes,
        });
    }

    let trees_needed = (total_tonnes * KG_PER_TONNE / KG_CO2_ABSORBED_PER_TREE_YEAR).ceil() as u64;

    Ok(FootprintResult {
        total_tonnes_co2e_per_year: total_tonnes,
        severity: SeverityLevel::from_tonnes(total_tonnes),
        delta_vs_national: total_tonnes - INDONESIA_AVG_TONNES_PER_CAPITA,
        delta_vs_global: total_tonnes - GLOBAL_AVG_TONNES_PER_CAPITA,
        trees_needed,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activities(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(key, quantity)| (key.to_string(), *quantity))
            .collect()
    }

    #[test]
    fn empty_input_is_zero_and_low() {
        let result = calculate_footprint(&HashMap::new()).unwrap();
        assert_eq!(result.total_tonnes_co2e_per_year, 0.0);
        assert_eq!(result.severity, SeverityLevel::Low);
        assert_eq!(result.trees_needed, 0);
        assert!(result.breakdown.is_empty());
        assert!((result.delta_vs_national - (-2.3)).abs() < 1e-12);
        assert!((result.delta_vs_global - (-4.7)).abs() < 1e-12);
    }

    #[test]
    fn electricity_350_kwh_per_month() {
        // 350 kWh/month -> 4200 kWh/year -> 4200 * 0.855 = 3591 kg = 3.591 t.
        let result = calculate_footprint(&activities(&[("electricity", 350.0)])).unwrap();
        assert!((result.total_tonnes_co2e_per_year - 3.591).abs() < 1e-9);
        assert_eq!(result.severity, SeverityLevel::Medium);
        // ceil(3591 / 22) = 164
        assert_eq!(result.trees_needed, 164);
    }

    #[test]
    fn flight_is_not_annualized_again() {
        // 5000 km/year * 0.255 kg/km = 1275 kg, with no x12.
        let result = calculate_footprint(&activities(&[("flight", 5000.0)])).unwrap();
        assert!((result.total_tonnes_co2e_per_year - 1.275).abs() < 1e-9);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let result = calculate_footprint(&activities(&[("teleport", 9000.0)])).unwrap();
        assert_eq!(result.total_tonnes_co2e_per_year, 0.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = calculate_footprint(&activities(&[("waste", -1.0)])).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidQuantity {
                activity: ActivityKey::Waste,
                value: -1.0,
            }
        );
    }

    #[test]
    fn nan_quantity_is_rejected() {
        let err = calculate_footprint(&activities(&[("transport", f64::NAN)])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidQuantity { .. }));
    }

    #[test]
    fn severity_band_edges_are_lower_inclusive() {
        assert_eq!(SeverityLevel::from_tonnes(0.0), SeverityLevel::Low);
        assert_eq!(SeverityLevel::from_tonnes(1.999), SeverityLevel::Low);
        assert_eq!(SeverityLevel::from_tonnes(2.0), SeverityLevel::Medium);
        assert_eq!(SeverityLevel::from_tonnes(4.999), SeverityLevel::Medium);
        assert_eq!(SeverityLevel::from_tonnes(5.0), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_tonnes(9.999), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_tonnes(10.0), SeverityLevel::VeryHigh);
    }

    #[test]
    fn breakdown_is_in_table_order_and_sums_to_total() {
        let input = activities(&[
            ("waste", 30.0),
            ("electricity", 350.0),
            ("meat_beef", 3.0),
        ]);
        let result = calculate_footprint(&input).unwrap();
        let keys: Vec<ActivityKey> = result.breakdown.iter().map(|e| e.activity).collect();
        assert_eq!(
            keys,
            vec![ActivityKey::Electricity, ActivityKey::MeatBeef, ActivityKey::Waste]
        );
        let sum: f64 = result.breakdown.iter().map(|e| e.annual_tonnes_co2e).sum();
        assert_eq!(sum, result.total_tonnes_co2e_per_year);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let a = activities(&[("electricity", 350.0), ("transport", 500.0), ("lpg", 12.0)]);
        let b = activities(&[("lpg", 12.0), ("electricity", 350.0), ("transport", 500.0)]);
        let first = calculate_footprint(&a).unwrap();
        let second = calculate_footprint(&b).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.total_tonnes_co2e_per_year.to_bits(),
            second.total_tonnes_co2e_per_year.to_bits()
        );
    }

    #[test]
    fn deltas_compare_against_fixed_baselines() {
        // 1000 kg/month of waste -> 6 t/year.
        let result = calculate_footprint(&activities(&[("waste", 1000.0)])).unwrap();
        assert!((result.total_tonnes_co2e_per_year - 6.0).abs() < 1e-9);
        assert!((result.delta_vs_national - 3.7).abs() < 1e-9);
        assert!((result.delta_vs_global - 1.3).abs() < 1e-9);
        assert_eq!(result.severity, SeverityLevel::High);
    }
}
