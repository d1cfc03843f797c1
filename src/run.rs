use crate::config::Config;
use cgmath::Vector2;
use instant::Instant;
use physics::{spawn_bodies, Simulation};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub tick_number: u64,
    pub merges: u64,
    pub removals: u64,
    pub respawns: u64,
    pub time_spent_in_physics: Duration,
    /// Centre of mass after the last tick, projected onto the first two axes.
    pub centre_of_mass: Option<Vector2<f64>>,
}

fn respawn(
    simulation: &mut Simulation,
    config: &Config,
    rng: &mut StdRng,
    now: Instant,
) -> anyhow::Result<()> {
    simulation.clear();
    let bodies = spawn_bodies(rng, &config.spawn, &config.simulation.bounds, now)?;
    for body in bodies {
        simulation.add_body(body)?;
    }
    Ok(())
}

/// Drives the simulation one tick per frame until `max_ticks` is reached.
///
/// Without `realtime` the clock is simulated: every frame is exactly
/// `frame_ms` later than the previous one and nothing sleeps.
pub fn run(config: &Config) -> anyhow::Result<Stats> {
    let mut rng = match config.driver.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame = Duration::from_millis(config.driver.frame_ms);
    let instant_start = Instant::now();
    let mut now = instant_start;

    let mut simulation = Simulation::new(config.simulation.clone())?;
    respawn(&mut simulation, config, &mut rng, now)?;
    log::info!("Spawned {} bodies", simulation.len());

    let mut stats = Stats::default();
    while config.driver.max_ticks.map_or(true, |max| stats.tick_number < max) {
        if simulation.len() < config.driver.respawn_below {
            log::info!(
                "Only {} bodies left, spawning {} new ones",
                simulation.len(),
                config.spawn.count
            );
            respawn(&mut simulation, config, &mut rng, now)?;
            stats.respawns += 1;
        }

        now += frame;
        if config.driver.realtime {
            if let Some(wait) = now.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
        }

        let instant_pre_physics = Instant::now();
        let tick = simulation.tick(now)?;
        stats.time_spent_in_physics += Instant::now().duration_since(instant_pre_physics);
        stats.tick_number += 1;
        stats.merges += tick.merges as u64;
        stats.removals += tick.removals as u64;
        stats.centre_of_mass = simulation.centre_of_mass().map(|c| c.to_vector2());

        if stats.tick_number.is_power_of_two() || stats.tick_number % 1024 == 0 {
            log::info!(
                "Elapsed {}ms total, {}ms physics ({} ticks), {} bodies, {} merges, {} removals",
                Instant::now().duration_since(instant_start).as_millis(),
                stats.time_spent_in_physics.as_millis(),
                stats.tick_number,
                simulation.len(),
                stats.merges,
                stats.removals,
            );
        }
    }
    Ok(stats)
}
