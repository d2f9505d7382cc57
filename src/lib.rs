//! Composite social-score calculator.
//!
//! Scores user metric bundles across six weighted categories (engagement,
//! content, trust, impact, monetization, governance), folds them into one
//! bounded social score with a tier label, and drives batch runs over
//! synthetic sample data: table and chart output plus a CSV/JSON artifact.
//!
//! The scoring core ([`scoring`]) is pure and deterministic; everything
//! else is glue around it.

pub mod analyze;
pub mod config;
pub mod generate;
pub mod metrics;
pub mod output;
pub mod scoring;
