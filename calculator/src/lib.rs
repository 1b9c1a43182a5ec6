//! C-NEX carbon accounting calculators.
//!
//! Three independent calculators over the reference data in `cnex_core`
//! (annual footprint, land carbon stock, credit valuation), plus offset
//! planning, ESG scoring and JSON report generation. Every entry point is
//! a pure function of its inputs and the immutable reference tables: no
//! shared mutable state, no I/O, safe to call from any number of
//! concurrent callers.

pub mod credit;
pub mod esg;
pub mod footprint;
pub mod offset;
pub mod report;
pub mod requests;
pub mod stock;

pub use credit::{calculate_credit_value, CreditResult};
pub use esg::{assess, category_score, overall_score, EsgAssessment, EsgCategory, EsgMetric, EsgRating};
pub use footprint::{calculate_footprint, ActivityEmission, FootprintResult, SeverityLevel};
pub use offset::{plan_offset, OffsetPlan, OffsetProjectType};
pub use report::AssessmentReport;
pub use requests::{CreditRequest, FootprintRequest, StockRequest};
pub use stock::{calculate_carbon_stock, calculate_carbon_stock_priced, StockResult};
