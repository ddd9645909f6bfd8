//! CLI entry-point for a one-shot adverse-event summary.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    data::openfda::{self, OpenFdaClient, SeverityFilter},
    summary,
};

/// Args for the `query` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Drug name, matched exactly against medicinalproduct.
    pub drug: String,
    /// Optional severity filter (All, Death, Hospitalization).
    #[arg(long)]
    pub seriousness: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = OpenFdaClient::new(&settings)?;
    let severity = SeverityFilter::from_param(args.seriousness.as_deref());
    let payload = client
        .fetch_events(&args.drug, severity)
        .await
        .with_context(|| format!("fetch adverse events for {}", args.drug))?;
    let events = openfda::results_from(&payload).context("decode openFDA results")?;

    let report = serde_json::json!({
        "metrics": summary::aggregate(&events),
        "trend": summary::trend::by_year(&events),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
