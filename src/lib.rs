//! Adverse-event dashboard core: openFDA proxy, metric aggregation, and
//! yearly trend bucketing, plus the Axum server that exposes them.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod summary;
