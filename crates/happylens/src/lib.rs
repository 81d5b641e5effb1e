//! Core library for HappyLens: country-happiness exploration.
//!
//! Loads a yearly happiness dataset, ranks countries by a user-weighted
//! composite of six well-being factors, and looks up pre-computed country
//! clusters for display grouping.

pub mod clusters;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ranking;
pub mod telemetry;
