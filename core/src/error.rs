use thiserror::Error;

use crate::credit_market::MarketKey;
use crate::emission_factor::ActivityKey;
use crate::land_cover::LandCoverKey;

pub type EngineResult<T> = Result<T, EngineError>;

/// Every failure mode of the engine. All variants are recoverable by the
/// caller correcting its input; there is no partial computation to roll
/// back and no retry policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("unknown emission factor key `{0}`")]
    UnknownFactorKey(String),

    #[error("unknown land cover key `{0}`")]
    UnknownLandCoverKey(String),

    #[error("unknown carbon market `{0}`")]
    UnknownMarket(String),

    #[error("standard `{standard}` is not listed on the {market} market")]
    UnknownStandard { market: MarketKey, standard: String },

    #[error("quantity {value} for activity `{activity}` must be a non-negative number")]
    InvalidQuantity { activity: ActivityKey, value: f64 },

    #[error("area must be a positive number of hectares, got {0}")]
    InvalidArea(f64),

    #[error("tonnage must be a non-negative number, got {0}")]
    InvalidTonnage(f64),

    #[error("exchange rate must be a positive number, got {0}")]
    InvalidExchangeRate(f64),

    #[error("percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),

    #[error("score {value} for metric `{metric}` must be between 0 and 100")]
    InvalidScore { metric: String, value: f64 },

    #[error("weight {value} for metric `{metric}` must be positive")]
    InvalidWeight { metric: String, value: f64 },

    #[error("no metrics supplied for {0}")]
    EmptyCategory(String),

    #[error(
        "land cover `{key}` declares {declared} tC/ha but its pools sum to {computed} tC/ha"
    )]
    InconsistentLandCover {
        key: LandCoverKey,
        declared: f64,
        computed: f64,
    },

    #[error("emission factor `{key}` has a negative factor {factor}")]
    NegativeEmissionFactor { key: ActivityKey, factor: f64 },

    #[error("price band for `{standard}` violates min <= avg <= max ordering")]
    MalformedPriceBand { standard: String },
}
