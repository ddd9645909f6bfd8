//! Wire types for the JSON API.

use serde::{Deserialize, Serialize};

use crate::summary::{trend::TrendPoint, Metrics};

/// Query parameters accepted by both adverse-event endpoints.
#[derive(Debug, Deserialize)]
pub struct AdverseEventParams {
    #[serde(rename = "drugName", default)]
    pub drug_name: Option<String>,
    #[serde(default)]
    pub seriousness: Option<String>,
}

/// Fixed-shape error envelope; never carries upstream detail.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Server-side rendition of the dashboard pipeline output.
#[derive(Debug, Serialize)]
pub struct SummaryDto {
    pub metrics: Metrics,
    pub trend: Vec<TrendPoint>,
}
