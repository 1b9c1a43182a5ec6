//! Carbon credit market price reference table.
//!
//! Price bands are USD per tonne CO2e, grouped by market segment. The
//! market is resolved before the standard so a caller can always tell
//! which of the two keys was wrong.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKey {
    Voluntary,
    Compliance,
    Indonesia,
}

impl MarketKey {
    pub const ALL: [MarketKey; 3] = [
        MarketKey::Voluntary,
        MarketKey::Compliance,
        MarketKey::Indonesia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MarketKey::Voluntary => "voluntary",
            MarketKey::Compliance => "compliance",
            MarketKey::Indonesia => "indonesia",
        }
    }
}

impl FromStr for MarketKey {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        MarketKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EngineError::UnknownMarket(s.to_string()))
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardKey {
    Vcs,
    GoldStandard,
    PlanVivo,
    EuEts,
    KoreaEts,
    ChinaEts,
    IdxCarbon,
    SrnPpi,
}

impl StandardKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StandardKey::Vcs => "vcs",
            StandardKey::GoldStandard => "gold_standard",
            StandardKey::PlanVivo => "plan_vivo",
            StandardKey::EuEts => "eu_ets",
            StandardKey::KoreaEts => "korea_ets",
            StandardKey::ChinaEts => "china_ets",
            StandardKey::IdxCarbon => "idx_carbon",
            StandardKey::SrnPpi => "srn_ppi",
        }
    }
}

impl fmt::Display for StandardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A min/avg/max triple. Used both for per-tonne price bands and for the
/// monetary ranges the calculators derive from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl PriceRange {
    pub fn scaled(&self, factor: f64) -> PriceRange {
        PriceRange {
            min: self.min * factor,
            max: self.max * factor,
            avg: self.avg * factor,
        }
    }

    fn is_ordered(&self) -> bool {
        0.0 <= self.min && self.min <= self.avg && self.avg <= self.max
    }
}

/// Global default band, applied when no market/standard is selected.
pub const DEFAULT_PRICE_BAND: PriceRange = PriceRange {
    min: 5.0,
    max: 20.0,
    avg: 12.0,
};

/// One certification standard's price band within a market segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditMarketStandard {
    pub market: MarketKey,
    pub key: StandardKey,
    pub name: &'static str,
    pub band: PriceRange,
}

static PRICE_STANDARDS: [CreditMarketStandard; 8] = [
    CreditMarketStandard {
        market: MarketKey::Voluntary,
        key: StandardKey::Vcs,
        name: "VCS (Verra)",
        band: PriceRange { min: 5.0, max: 20.0, avg: 12.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Voluntary,
        key: StandardKey::GoldStandard,
        name: "Gold Standard",
        band: PriceRange { min: 8.0, max: 30.0, avg: 18.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Voluntary,
        key: StandardKey::PlanVivo,
        name: "Plan Vivo",
        band: PriceRange { min: 10.0, max: 25.0, avg: 15.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Compliance,
        key: StandardKey::EuEts,
        name: "EU ETS",
        band: PriceRange { min: 80.0, max: 100.0, avg: 90.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Compliance,
        key: StandardKey::KoreaEts,
        name: "Korea ETS",
        band: PriceRange { min: 15.0, max: 25.0, avg: 20.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Compliance,
        key: StandardKey::ChinaEts,
        name: "China ETS",
        band: PriceRange { min: 8.0, max: 12.0, avg: 10.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Indonesia,
        key: StandardKey::IdxCarbon,
        name: "IDX Carbon",
        band: PriceRange { min: 5.0, max: 15.0, avg: 10.0 },
    },
    CreditMarketStandard {
        market: MarketKey::Indonesia,
        key: StandardKey::SrnPpi,
        name: "SRN-PPI",
        band: PriceRange { min: 2.0, max: 10.0, avg: 5.0 },
    },
];

/// Resolve a standard within a market. The standard must be listed under
/// that market; a standard from another market is `UnknownStandard`.
pub fn price_standard(
    market: MarketKey,
    standard: &str,
) -> EngineResult<&'static CreditMarketStandard> {
    PRICE_STANDARDS
        .iter()
        .find(|entry| entry.market == market && entry.key.as_str() == standard)
        .ok_or_else(|| EngineError::UnknownStandard {
            market,
            standard: standard.to_string(),
        })
}

/// Read-only view of every listed standard, for UI population.
pub fn list_price_standards() -> &'static [CreditMarketStandard] {
    &PRICE_STANDARDS
}

/// Standards listed under one market segment, in table order.
pub fn standards_for(market: MarketKey) -> impl Iterator<Item = &'static CreditMarketStandard> {
    PRICE_STANDARDS.iter().filter(move |entry| entry.market == market)
}

pub(crate) fn validate() -> EngineResult<()> {
    if !DEFAULT_PRICE_BAND.is_ordered() {
        return Err(EngineError::MalformedPriceBand {
            standard: "default".to_string(),
        });
    }
    for entry in &PRICE_STANDARDS {
        if !entry.band.is_ordered() {
            return Err(EngineError::MalformedPriceBand {
                standard: entry.key.as_str().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_is_ordered() {
        validate().unwrap();
        for entry in list_price_standards() {
            assert!(entry.band.min <= entry.band.avg);
            assert!(entry.band.avg <= entry.band.max);
            assert!(entry.band.min >= 0.0);
        }
    }

    #[test]
    fn resolves_standard_within_market() {
        let std = price_standard(MarketKey::Indonesia, "srn_ppi").unwrap();
        assert_eq!(std.band.avg, 5.0);
        assert_eq!(std.name, "SRN-PPI");
    }

    #[test]
    fn standard_from_another_market_is_unknown() {
        let err = price_standard(MarketKey::Indonesia, "eu_ets").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownStandard {
                market: MarketKey::Indonesia,
                standard: "eu_ets".to_string(),
            }
        );
    }

    #[test]
    fn unknown_market_string_is_distinct() {
        let err = "otc".parse::<MarketKey>().unwrap_err();
        assert_eq!(err, EngineError::UnknownMarket("otc".to_string()));
    }

    #[test]
    fn each_market_lists_its_standards() {
        assert_eq!(standards_for(MarketKey::Voluntary).count(), 3);
        assert_eq!(standards_for(MarketKey::Compliance).count(), 3);
        assert_eq!(standards_for(MarketKey::Indonesia).count(), 2);
    }

    #[test]
    fn scaling_a_band_scales_all_bounds() {
        let scaled = DEFAULT_PRICE_BAND.scaled(10.0);
        assert_eq!(scaled.min, 50.0);
        assert_eq!(scaled.avg, 120.0);
        assert_eq!(scaled.max, 200.0);
    }
}
