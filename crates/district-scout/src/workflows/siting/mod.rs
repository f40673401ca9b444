//! Site selection workflow: validate business criteria, score candidate districts, rank them.
//!
//! District metrics are synthetic uniform draws, not market data. The draw source is injected
//! so runs can be reproduced from a seed or a scripted sequence.

pub mod domain;
pub mod locale;
pub mod ranking;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BusinessType, CompetitionTier, DistrictRecord, FormInput, Recommendation, ScoreBreakdown,
    TrafficTier,
};
pub use locale::{format_thousands, DisplayLocale};
pub use ranking::{rank_districts, RankedDistricts};
pub use report::{AnalysisReport, BestDistrictView, DistrictRowView};
pub use router::siting_router;
pub use scoring::{
    score_district, DistrictDraws, DistrictScorer, DrawSource, RandomDraws, ScriptedDraws,
};
pub use service::{AnalysisError, RandomAnalysisService, SiteAnalysisService};
pub use validation::{
    validate, FieldErrors, FormField, SiteCriteria, ValidationIssue, ValidationResult,
};
