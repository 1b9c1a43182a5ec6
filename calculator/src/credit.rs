//! Monetary value of a credit tonnage under a market/standard selection.

use std::str::FromStr;

use serde::Serialize;

use cnex_core::{
    price_standard, EngineError, EngineResult, MarketKey, PriceRange, StandardKey,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditResult {
    pub market: MarketKey,
    pub standard: StandardKey,
    pub tonnes_co2e: f64,
    pub value_usd: PriceRange,
    pub value_idr: PriceRange,
    /// Exchange rate the IDR range was derived with.
    pub idr_per_usd: f64,
}

/// Value a tonnage of CO2e at the selected standard's price band.
///
/// The IDR/USD rate is explicit so callers (and tests) control it; see
/// `cnex_core::constants::DEFAULT_IDR_PER_USD` for the shipped default.
pub fn calculate_credit_value(
    tonnes_co2e: f64,
    market: &str,
    standard: &str,
    idr_per_usd: f64,
) -> EngineResult<CreditResult> {
    if !(tonnes_co2e >= 0.0) || !tonnes_co2e.is_finite() {
        return Err(EngineError::InvalidTonnage(tonnes_co2e));
    }
    if !(idr_per_usd > 0.0) || !idr_per_usd.is_finite() {
        return Err(EngineError::InvalidExchangeRate(idr_per_usd));
    }
    let market = MarketKey::from_str(market)?;
    let entry = price_standard(market, standard)?;

    let value_usd = entry.band.scaled(tonnes_co2e);
    let value_idr = value_usd.scaled(idr_per_usd);

    log::debug!(
        "valued {tonnes_co2e} tCO2e on {market}/{standard}: avg ${}",
        value_usd.avg
    );

    Ok(CreditResult {
        market,
        standard: entry.key,
        tonnes_co2e,
        value_usd,
        value_idr,
        idr_per_usd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnex_core::constants::DEFAULT_IDR_PER_USD;

    #[test]
    fn srn_ppi_values_a_large_project() {
        let result =
            calculate_credit_value(892_167.0, "indonesia", "srn_ppi", DEFAULT_IDR_PER_USD).unwrap();
        assert_eq!(result.value_usd.min, 892_167.0 * 2.0);
        assert_eq!(result.value_usd.avg, 4_460_835.0);
        assert_eq!(result.value_usd.max, 892_167.0 * 10.0);
        assert_eq!(result.value_idr.avg, 4_460_835.0 * 15_500.0);
        assert_eq!(result.standard, StandardKey::SrnPpi);
    }

    #[test]
    fn exchange_rate_is_injectable() {
        let at_16k = calculate_credit_value(100.0, "voluntary", "vcs", 16_000.0).unwrap();
        assert_eq!(at_16k.value_idr.avg, 100.0 * 12.0 * 16_000.0);
        assert_eq!(at_16k.idr_per_usd, 16_000.0);
    }

    #[test]
    fn zero_tonnage_is_allowed() {
        let result = calculate_credit_value(0.0, "compliance", "eu_ets", 15_500.0).unwrap();
        assert_eq!(result.value_usd.min, 0.0);
        assert_eq!(result.value_usd.max, 0.0);
    }

    #[test]
    fn negative_tonnage_is_rejected() {
        let err = calculate_credit_value(-1.0, "voluntary", "vcs", 15_500.0).unwrap_err();
        assert_eq!(err, EngineError::InvalidTonnage(-1.0));
    }

    #[test]
    fn nonpositive_exchange_rate_is_rejected() {
        let err = calculate_credit_value(1.0, "voluntary", "vcs", 0.0).unwrap_err();
        assert_eq!(err, EngineError::InvalidExchangeRate(0.0));
    }

    #[test]
    fn unknown_market_and_unknown_standard_are_distinct() {
        let market_err = calculate_credit_value(1.0, "otc", "vcs", 15_500.0).unwrap_err();
        assert_eq!(market_err, EngineError::UnknownMarket("otc".to_string()));

        let standard_err = calculate_credit_value(1.0, "compliance", "vcs", 15_500.0).unwrap_err();
        assert_eq!(
            standard_err,
            EngineError::UnknownStandard {
                market: MarketKey::Compliance,
                standard: "vcs".to_string(),
            }
        );
    }
}
