//! JSON request documents for the three calculators.
//!
//! The UI layer submits untyped JSON; these types deserialize it and
//! dispatch into the typed calculators, which own all validation.

use std::collections::HashMap;

use serde::Deserialize;

use cnex_core::constants::DEFAULT_IDR_PER_USD;
use cnex_core::EngineResult;

use crate::credit::{calculate_credit_value, CreditResult};
use crate::footprint::{calculate_footprint, FootprintResult};
use crate::stock::{calculate_carbon_stock, calculate_carbon_stock_priced, StockResult};

#[derive(Debug, Clone, Deserialize)]
pub struct FootprintRequest {
    pub activities: HashMap<String, f64>,
}

impl FootprintRequest {
    pub fn run(&self) -> EngineResult<FootprintResult> {
        calculate_footprint(&self.activities)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockRequest {
    pub land_cover: String,
    pub area_hectares: f64,
    /// Selecting both applies that band instead of the global default.
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub standard: Option<String>,
}

impl StockRequest {
    pub fn run(&self) -> EngineResult<StockResult> {
        match (&self.market, &self.standard) {
            (Some(market), Some(standard)) => {
                calculate_carbon_stock_priced(&self.land_cover, self.area_hectares, market, standard)
            }
            _ => calculate_carbon_stock(&self.land_cover, self.area_hectares),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditRequest {
    pub tonnes_co2e: f64,
    pub market: String,
    pub standard: String,
    #[serde(default)]
    pub idr_per_usd: Option<f64>,
}

impl CreditRequest {
    pub fn run(&self) -> EngineResult<CreditResult> {
        calculate_credit_value(
            self.tonnes_co2e,
            &self.market,
            &self.standard,
            self.idr_per_usd.unwrap_or(DEFAULT_IDR_PER_USD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::SeverityLevel;
    use std::fs;

    #[test]
    fn footprint_fixture() -> Result<(), Box<dyn std::error::Error>> {
        let json_content = fs::read_to_string("json-examples/footprint_request.json")?;
        let request: FootprintRequest = serde_json::from_str(&json_content)?;
        let result = request.run()?;
        assert!((result.total_tonnes_co2e_per_year - 3.591).abs() < 1e-9);
        assert_eq!(result.severity, SeverityLevel::Medium);
        Ok(())
    }

    #[test]
    fn stock_fixture() -> Result<(), Box<dyn std::error::Error>> {
        let json_content = fs::read_to_string("json-examples/stock_request.json")?;
        let request: StockRequest = serde_json::from_str(&json_content)?;
        let result = request.run()?;
        assert!((result.total_tonnes_c - 34_000.0).abs() < 1e-6);
        assert!((result.co2_equivalent_tonnes - 124_780.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn credit_fixture() -> Result<(), Box<dyn std::error::Error>> {
        let json_content = fs::read_to_string("json-examples/credit_request.json")?;
        let request: CreditRequest = serde_json::from_str(&json_content)?;
        let result = request.run()?;
        assert_eq!(result.value_usd.avg, 4_460_835.0);
        assert_eq!(result.value_idr.avg, 4_460_835.0 * 15_500.0);
        Ok(())
    }

    #[test]
    fn stock_request_with_selected_standard() {
        let request: StockRequest = serde_json::from_str(
            r#"{
                "land_cover": "secondary_forest",
                "area_hectares": 10.0,
                "market": "voluntary",
                "standard": "plan_vivo"
            }"#,
        )
        .unwrap();
        let result = request.run().unwrap();
        assert!((result.credit_value_usd.avg - result.co2_equivalent_tonnes * 15.0).abs() < 1e-6);
    }

    #[test]
    fn credit_request_defaults_the_exchange_rate() {
        let request: CreditRequest = serde_json::from_str(
            r#"{ "tonnes_co2e": 10.0, "market": "voluntary", "standard": "vcs" }"#,
        )
        .unwrap();
        let result = request.run().unwrap();
        assert_eq!(result.idr_per_usd, DEFAULT_IDR_PER_USD);
    }
}
