//! `spbcopy`: a network `pbcopy`.
//!
//! `cat notes.txt | spbcopy` posts the piped content to a clipboard service,
//! which puts it on the clipboard of the machine it runs on.

use std::process::ExitCode;

use spbcopy_core::{config, forward, ClientConfig, SpbcopyResult};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout stays clean for pipelines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(phase = e.phase(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> SpbcopyResult<()> {
    let config_path = config::default_config_path();
    let config = ClientConfig::load(&config_path)?;
    debug!(url = %config.api_url(), "Resolved clipboard service");

    forward(&config, tokio::io::stdin()).await?;
    Ok(())
}
