use crate::config::Config;
use clap::Parser;
use std::{fmt, path::PathBuf};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Overrides produced an unusable configuration
    InvalidOverride(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidOverride(msg) => write!(f, "Invalid override: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Headless n-body gravity simulation with merging bodies
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of bodies to spawn (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Stop after this many ticks (overrides config file)
    #[arg(short, long, value_name = "TICKS")]
    pub ticks: Option<u64>,

    /// Seed for body generation (overrides config file)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Milliseconds of simulated wall time per frame (overrides config file)
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Sleep between frames so the run keeps pace with the wall clock
    #[arg(long)]
    pub realtime: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<Config, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            Config::load(path).map_err(|e| CliError::ConfigLoad(e.to_string()))?
        }
        None => Config::default(),
    };

    if let Some(count) = args.bodies {
        log::info!("Overriding body count to: {count}");
        config.spawn.count = count;
    }
    if let Some(ticks) = args.ticks {
        config.driver.max_ticks = Some(ticks);
    }
    if let Some(seed) = args.seed {
        config.driver.seed = Some(seed);
    }
    if let Some(frame_ms) = args.frame_ms {
        if frame_ms == 0 {
            return Err(CliError::InvalidOverride("frame_ms must be positive".into()));
        }
        config.driver.frame_ms = frame_ms;
    }
    if args.realtime {
        config.driver.realtime = true;
    }

    config
        .validate()
        .map_err(|e| CliError::InvalidOverride(e.to_string()))?;
    Ok(config)
}
