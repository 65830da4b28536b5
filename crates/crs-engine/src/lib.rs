//! Comprehensive Ranking System scoring engine with the configuration, telemetry and
//! HTTP plumbing needed to serve it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
