//! Emission factor reference table.
//!
//! One entry per activity category, giving the kg CO2e emitted per
//! reporting unit together with the period the unit is reported over.
//! The table is fixed at compile time and shared read-only by every
//! calculator invocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Closed set of activity categories the footprint calculator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKey {
    Electricity,
    Transport,
    Flight,
    FuelGasoline,
    FuelDiesel,
    Lpg,
    MeatBeef,
    MeatChicken,
    Waste,
}

impl ActivityKey {
    /// Every registered activity, in table order. Calculators iterate this
    /// so their output does not depend on the caller's map iteration order.
    pub const ALL: [ActivityKey; 9] = [
        ActivityKey::Electricity,
        ActivityKey::Transport,
        ActivityKey::Flight,
        ActivityKey::FuelGasoline,
        ActivityKey::FuelDiesel,
        ActivityKey::Lpg,
        ActivityKey::MeatBeef,
        ActivityKey::MeatChicken,
        ActivityKey::Waste,
    ];

    /// Position in the table, and therefore in [`ActivityKey::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            ActivityKey::Electricity => 0,
            ActivityKey::Transport => 1,
            ActivityKey::Flight => 2,
            ActivityKey::FuelGasoline => 3,
            ActivityKey::FuelDiesel => 4,
            ActivityKey::Lpg => 5,
            ActivityKey::MeatBeef => 6,
            ActivityKey::MeatChicken => 7,
            ActivityKey::Waste => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKey::Electricity => "electricity",
            ActivityKey::Transport => "transport",
            ActivityKey::Flight => "flight",
            ActivityKey::FuelGasoline => "fuel_gasoline",
            ActivityKey::FuelDiesel => "fuel_diesel",
            ActivityKey::Lpg => "lpg",
            ActivityKey::MeatBeef => "meat_beef",
            ActivityKey::MeatChicken => "meat_chicken",
            ActivityKey::Waste => "waste",
        }
    }
}

impl FromStr for ActivityKey {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        ActivityKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EngineError::UnknownFactorKey(s.to_string()))
    }
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period an activity quantity is reported over. Annualization branches on
/// this field rather than on the activity itself, so a new activity with a
/// different period needs no change to the calculation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    Month,
    Year,
}

impl PeriodUnit {
    /// Scale a quantity reported over this period to a yearly quantity.
    pub fn annualize(self, quantity: f64) -> f64 {
        match self {
            PeriodUnit::Month => quantity * crate::constants::MONTHS_PER_YEAR,
            PeriodUnit::Year => quantity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodUnit::Month => "month",
            PeriodUnit::Year => "year",
        }
    }
}

/// CO2e intensity of one activity category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub key: ActivityKey,
    pub name: &'static str,
    /// kg CO2e emitted per reporting unit.
    pub factor_kg_co2e_per_unit: f64,
    /// Reporting unit, without the period ("kWh", "km", "liter", "kg").
    pub unit: &'static str,
    pub period: PeriodUnit,
    pub source: &'static str,
}

impl EmissionFactor {
    /// Unit label including the period, e.g. "kWh/month".
    pub fn unit_label(&self) -> String {
        format!("{}/{}", self.unit, self.period.as_str())
    }
}

static EMISSION_FACTORS: [EmissionFactor; 9] = [
    EmissionFactor {
        key: ActivityKey::Electricity,
        name: "Electricity",
        factor_kg_co2e_per_unit: 0.855,
        unit: "kWh",
        period: PeriodUnit::Month,
        source: "ESDM Indonesia 2023",
    },
    EmissionFactor {
        key: ActivityKey::Transport,
        name: "Ground Transport",
        factor_kg_co2e_per_unit: 0.21,
        unit: "km",
        period: PeriodUnit::Month,
        source: "IPCC 2019",
    },
    EmissionFactor {
        key: ActivityKey::Flight,
        name: "Air Travel",
        factor_kg_co2e_per_unit: 0.255,
        unit: "km",
        period: PeriodUnit::Year,
        source: "ICAO",
    },
    EmissionFactor {
        key: ActivityKey::FuelGasoline,
        name: "Gasoline",
        factor_kg_co2e_per_unit: 2.31,
        unit: "liter",
        period: PeriodUnit::Month,
        source: "IPCC 2019",
    },
    EmissionFactor {
        key: ActivityKey::FuelDiesel,
        name: "Diesel",
        factor_kg_co2e_per_unit: 2.68,
        unit: "liter",
        period: PeriodUnit::Month,
        source: "IPCC 2019",
    },
    EmissionFactor {
        key: ActivityKey::Lpg,
        name: "LPG Gas",
        factor_kg_co2e_per_unit: 2.98,
        unit: "kg",
        period: PeriodUnit::Month,
        source: "IPCC 2019",
    },
    EmissionFactor {
        key: ActivityKey::MeatBeef,
        name: "Beef",
        factor_kg_co2e_per_unit: 27.0,
        unit: "kg",
        period: PeriodUnit::Month,
        source: "Poore & Nemecek 2018",
    },
    EmissionFactor {
        key: ActivityKey::MeatChicken,
        name: "Chicken",
        factor_kg_co2e_per_unit: 6.9,
        unit: "kg",
        period: PeriodUnit::Month,
        source: "Poore & Nemecek 2018",
    },
    EmissionFactor {
        key: ActivityKey::Waste,
        name: "Waste",
        factor_kg_co2e_per_unit: 0.5,
        unit: "kg",
        period: PeriodUnit::Month,
        source: "IPCC 2019",
    },
];

/// Look up the emission factor for a registered activity. Total lookup is
/// an index into a fixed array; the key is already proof of membership.
pub fn emission_factor(key: ActivityKey) -> &'static EmissionFactor {
    &EMISSION_FACTORS[key.index()]
}

/// Read-only view of the whole table, for UI population.
pub fn list_emission_factors() -> &'static [EmissionFactor] {
    &EMISSION_FACTORS
}

pub(crate) fn validate() -> EngineResult<()> {
    for factor in &EMISSION_FACTORS {
        if !(factor.factor_kg_co2e_per_unit >= 0.0) {
            return Err(EngineError::NegativeEmissionFactor {
                key: factor.key,
                factor: factor.factor_kg_co2e_per_unit,
            });
        }
    }
    Ok(())
}
