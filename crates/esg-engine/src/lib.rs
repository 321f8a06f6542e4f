//! Scoring and reporting core for the ESG self-assessment dashboard.

pub mod config;
pub mod error;
pub mod reporting;
pub mod scoring;
pub mod telemetry;
