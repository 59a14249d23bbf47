use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod args;
mod scenario;

use args::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    info!(?cfg, "Kart config loaded");

    scenario::run(cfg, &args)
}

fn load_config(args: &Args) -> Result<kart::KartConfig> {
    match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).context("parsing kart config")
        }
        None => Ok(kart::KartConfig::default()),
    }
}
