//! Weighted ESG scoring for carbon projects.
//!
//! Metrics carry a 0-100 score and a weight; category and overall scores
//! are weight-normalized averages rounded to the nearest integer, and the
//! overall score maps onto a letter rating tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use cnex_core::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EsgCategory {
    #[serde(rename = "E")]
    Environmental,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "G")]
    Governance,
}

impl EsgCategory {
    pub const ALL: [EsgCategory; 3] = [
        EsgCategory::Environmental,
        EsgCategory::Social,
        EsgCategory::Governance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EsgCategory::Environmental => "environmental",
            EsgCategory::Social => "social",
            EsgCategory::Governance => "governance",
        }
    }
}

impl fmt::Display for EsgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgMetric {
    pub category: EsgCategory,
    pub name: String,
    /// 0-100.
    pub score: f64,
    /// Relative importance; need not sum to 1 across a metric set.
    pub weight: f64,
}

/// Letter rating tiers for an overall ESG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EsgRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "B")]
    B,
}

impl EsgRating {
    /// AAA >= 88, AA >= 80, A >= 70, BBB >= 60, BB >= 50, else B.
    pub fn from_score(score: u32) -> EsgRating {
        match score {
            88.. => EsgRating::Aaa,
            80..=87 => EsgRating::Aa,
            70..=79 => EsgRating::A,
            60..=69 => EsgRating::Bbb,
            50..=59 => EsgRating::Bb,
            _ => EsgRating::B,
        }
    }
}

impl fmt::Display for EsgRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EsgRating::Aaa => "AAA",
            EsgRating::Aa => "AA",
            EsgRating::A => "A",
            EsgRating::Bbb => "BBB",
            EsgRating::Bb => "BB",
            EsgRating::B => "B",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EsgAssessment {
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
    pub overall: u32,
    pub rating: EsgRating,
}

fn validate_metrics(metrics: &[EsgMetric]) -> EngineResult<()> {
    for metric in metrics {
        if !(0.0..=100.0).contains(&metric.score) || !metric.score.is_finite() {
            return Err(EngineError::InvalidScore {
                metric: metric.name.clone(),
                value: metric.score,
            });
        }
        if !(metric.weight > 0.0) || !metric.weight.is_finite() {
            return Err(EngineError::InvalidWeight {
                metric: metric.name.clone(),
                value: metric.weight,
            });
        }
    }
    Ok(())
}

fn weighted_average(metrics: impl Iterator<Item = (f64, f64)>) -> Option<u32> {
    let (weighted_sum, total_weight) = metrics.fold((0.0, 0.0), |(sum, weight), (s, w)| {
        (sum + s * w, weight + w)
    });
    if total_weight == 0.0 {
        return None;
    }
    Some((weighted_sum / total_weight).round() as u32)
}

/// Weight-normalized score of one category's metrics.
pub fn category_score(metrics: &[EsgMetric], category: EsgCategory) -> EngineResult<u32> {
    validate_metrics(metrics)?;
    weighted_average(
        metrics
            .iter()
            .filter(|m| m.category == category)
            .map(|m| (m.score, m.weight)),
    )
    .ok_or_else(|| EngineError::EmptyCategory(category.to_string()))
}

/// Weight-normalized score over every metric.
pub fn overall_score(metrics: &[EsgMetric]) -> EngineResult<u32> {
    validate_metrics(metrics)?;
    weighted_average(metrics.iter().map(|m| (m.score, m.weight)))
        .ok_or_else(|| EngineError::EmptyCategory("overall".to_string()))
}

/// Full assessment: all three category scores, the overall score and its
/// rating tier. Every category must have at least one metric.
pub fn assess(metrics: &[EsgMetric]) -> EngineResult<EsgAssessment> {
    let environmental = category_score(metrics, EsgCategory::Environmental)?;
    let social = category_score(metrics, EsgCategory::Social)?;
    let governance = category_score(metrics, EsgCategory::Governance)?;
    let overall = overall_score(metrics)?;
    Ok(EsgAssessment {
        environmental,
        social,
        governance,
        overall,
        rating: EsgRating::from_score(overall),
    })
}
