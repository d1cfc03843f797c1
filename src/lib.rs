pub mod cli;
pub mod config;
pub mod run;

use clap::Parser;

pub fn start() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    let config = cli::load_and_apply_config(&args)?;

    log::info!("Setting up");
    let stats = run::run(&config)?;
    log::info!(
        "Finished after {} ticks: {} merges, {} removals, {} respawns, {}ms in physics",
        stats.tick_number,
        stats.merges,
        stats.removals,
        stats.respawns,
        stats.time_spent_in_physics.as_millis(),
    );
    if let Some(centre) = stats.centre_of_mass {
        log::info!("Centre of mass at ({:.1}, {:.1})", centre.x, centre.y);
    }
    Ok(())
}
