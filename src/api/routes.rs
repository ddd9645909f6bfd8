//! HTTP route handlers for Axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use crate::{
    api::types::{AdverseEventParams, ErrorBody, SummaryDto},
    data::openfda::{self, FetchError, SeverityFilter},
    summary,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

/// Pass-through proxy in front of the openFDA drug-event endpoint.
pub async fn adverse_events(
    State(state): State<AppState>,
    Query(params): Query<AdverseEventParams>,
) -> ApiResult<serde_json::Value> {
    let severity = SeverityFilter::from_param(params.seriousness.as_deref());
    let payload = state
        .openfda
        .fetch_events(params.drug_name.as_deref().unwrap_or(""), severity)
        .await
        .map_err(reject)?;
    Ok(Json(payload))
}

/// Fetch, aggregate, and bucket in one round trip for the dashboard.
pub async fn adverse_event_summary(
    State(state): State<AppState>,
    Query(params): Query<AdverseEventParams>,
) -> ApiResult<SummaryDto> {
    let severity = SeverityFilter::from_param(params.seriousness.as_deref());
    let payload = state
        .openfda
        .fetch_events(params.drug_name.as_deref().unwrap_or(""), severity)
        .await
        .map_err(reject)?;
    let events = openfda::results_from(&payload).map_err(reject)?;
    Ok(Json(SummaryDto {
        metrics: summary::aggregate(&events),
        trend: summary::trend::by_year(&events),
    }))
}

/// Collapse the fetch taxonomy into the two public envelopes. The raw error
/// goes to the operational log, never to the caller.
fn reject(err: FetchError) -> (StatusCode, Json<ErrorBody>) {
    if err.is_validation() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Drug name is required",
            }),
        );
    }
    error!(%err, "openFDA fetch failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Failed to fetch data from OpenFDA",
        }),
    )
}
