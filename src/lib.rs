//! # flavourdna
//!
//! Survey scoring and personalised report generation for the
//! "We Are What We Eat" food-science study.
//!
//! The crate turns raw survey answers into a six-dimension flavour profile,
//! a food-neophobia index, a set of personalised healthy-swap suggestions,
//! and a two-page visual report per respondent. It also provides the
//! aggregate analyst view: console summary, CSV exports, and a JSON
//! statistics summary across the whole cohort.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod export;
pub mod report;
pub mod scoring;
pub mod store;
pub mod survey;

pub use report::{generate_report, RenderedReport};
pub use scoring::{Dimension, DimensionScores, FlavourProfile, NeophobiaBand, SubstitutionSet};
pub use survey::SurveyResponse;

/// Crate version, exposed for footers and export metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project display name used across report banners and exports.
pub const PROJECT_NAME: &str = "We Are What We Eat";
