//! Report counts bucketed by year for the trend chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::openfda::EventRecord;

/// One bar in the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: String,
    pub count: u64,
}

/// Count reports per report year, ascending, sparse over empty years.
///
/// Reports without a well-formed date contribute nothing.
pub fn by_year(events: &[EventRecord]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<&str, u64> = BTreeMap::new();
    for event in events {
        if let Some(year) = event.report_year() {
            *buckets.entry(year).or_insert(0) += 1;
        }
    }
    buckets
        .into_iter()
        .map(|(year, count)| TrendPoint {
            year: year.to_string(),
            count,
        })
        .collect()
}
