//! Upstream data access layer.

pub mod openfda;
