//! Serve command - run the HTTP extraction server.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::config::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Model directory (overrides config)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(model_dir) = args.model_dir {
        config.models.model_dir = model_dir;
    }

    info!(
        "Serving on {}:{} with models from {}",
        config.server.host,
        config.server.port,
        config.models.model_dir.display()
    );

    idocr_core::api::serve(&config).await?;

    Ok(())
}
