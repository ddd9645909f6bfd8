//! Entry point wiring CLI dispatch to the proxy and summary pipeline.

use ae_pulse::{cli::Cli, config::Settings, logging};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
