use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "kart-sim")]
#[command(about = "Headless scripted run of the kart controller", long_about = None)]
pub struct Args {
    /// Optional TOML file of kart tunables (defaults are the stock kart)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Fixed simulation rate in Hz
    #[arg(long, default_value_t = 50)]
    pub hz: u32,
    /// Scripted run length in seconds
    #[arg(long, default_value_t = 8.0)]
    pub seconds: f32,
}
