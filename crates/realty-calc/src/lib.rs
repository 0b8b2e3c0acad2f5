//! Mortgage amortization and home-value estimation for the brokerage site.
//!
//! The calculators are plain functions over typed inputs; the service, router,
//! and repository modules wrap them for the HTTP surface in `realty-calc-api`.

pub mod calculators;
pub mod config;
pub mod error;
pub mod telemetry;
