//! Dispatch simulation core: engine, battery model, KPIs, and sweep.

/// BESS state-of-charge model.
pub mod battery;
pub mod engine;
pub mod kpi;
/// Representative dispatch-day extraction.
pub mod profile;
pub mod sweep;
pub mod types;
