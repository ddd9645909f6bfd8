//! Aggregate metrics computed over one page of adverse-event reports.

pub mod trend;

use serde::Serialize;

use crate::data::openfda::{EventRecord, Sex};

/// Counters backing the dashboard's metric tiles.
///
/// Flag-based categories overlap: one report can count toward both `deaths`
/// and `life_threatening`. The sex breakdown partitions the list, so its
/// components always sum to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total: u64,
    pub deaths: u64,
    pub hospitalizations: u64,
    pub life_threatening: u64,
    #[serde(rename = "seriousNonDH")]
    pub serious_non_dh: u64,
    pub by_sex: SexBreakdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SexBreakdown {
    pub male: u64,
    pub female: u64,
    pub unknown: u64,
}

/// Tally one event list into `Metrics` in a single pass.
///
/// Pure and order-insensitive; an empty list yields the identity value.
pub fn aggregate(events: &[EventRecord]) -> Metrics {
    let mut metrics = Metrics::default();
    for event in events {
        metrics.total += 1;
        if event.is_death() {
            metrics.deaths += 1;
        }
        if event.is_hospitalization() {
            metrics.hospitalizations += 1;
        }
        if event.is_life_threatening() {
            metrics.life_threatening += 1;
        }
        if event.is_serious() && !event.is_death() && !event.is_hospitalization() {
            metrics.serious_non_dh += 1;
        }
        match event.sex() {
            Sex::Male => metrics.by_sex.male += 1,
            Sex::Female => metrics.by_sex.female += 1,
            Sex::Unknown => metrics.by_sex.unknown += 1,
        }
    }
    metrics
}
