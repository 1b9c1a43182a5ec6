//! Downloadable assessment reports.
//!
//! Bundles a stock result with an optional credit valuation under an id
//! and a generation timestamp, serialized as pretty JSON for the UI's
//! report download.

use chrono::Utc;
use serde::Serialize;

use crate::credit::CreditResult;
use crate::stock::StockResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub id: String,
    /// RFC 3339, UTC.
    pub generated_at: String,
    pub stock: StockResult,
    pub credit: Option<CreditResult>,
}

impl AssessmentReport {
    pub fn new(id: impl Into<String>, stock: StockResult, credit: Option<CreditResult>) -> Self {
        let report = AssessmentReport {
            id: id.into(),
            generated_at: Utc::now().to_rfc3339(),
            stock,
            credit,
        };
        log::info!("generated assessment report {}", report.id);
        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::calculate_credit_value;
    use crate::stock::calculate_carbon_stock;

    #[test]
    fn report_serializes_with_all_sections() {
        let stock = calculate_carbon_stock("mangrove", 25.0).unwrap();
        let credit =
            calculate_credit_value(stock.co2_equivalent_tonnes, "indonesia", "idx_carbon", 15_500.0)
                .unwrap();
        let report = AssessmentReport::new("RPT-0001", stock, Some(credit));

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "RPT-0001");
        assert_eq!(value["stock"]["land_cover"], "mangrove");
        assert_eq!(value["credit"]["standard"], "idx_carbon");
        assert!(value["generated_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn credit_section_is_optional() {
        let stock = calculate_carbon_stock("grassland", 1.0).unwrap();
        let report = AssessmentReport::new("RPT-0002", stock, None);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["credit"].is_null());
    }
}
