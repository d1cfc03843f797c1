use crate::{
    body::Body,
    error::{PhysicsError, Result},
    vector::Vector,
};
use instant::Instant;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape of a freshly generated population.
///
/// Masses, speeds and coordinates are whole numbers, drawn uniformly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub count: usize,
    pub min_mass: u32,
    pub max_mass: u32,
    /// Largest initial speed along each axis; velocities are never negative.
    pub max_speed: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 100,
            min_mass: 1,
            max_mass: 10,
            max_speed: 1,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_mass == 0 || self.min_mass > self.max_mass {
            return Err(PhysicsError::InvalidConfig(format!(
                "spawn masses must satisfy 0 < min_mass <= max_mass, got {}..={}",
                self.min_mass, self.max_mass
            )));
        }
        Ok(())
    }
}

/// Scatters `config.count` bodies across the box `[0, bounds]`, all spawned at `now`.
pub fn spawn_bodies(
    rng: &mut impl Rng,
    config: &SpawnConfig,
    bounds: &[f64],
    now: Instant,
) -> Result<Vec<Body>> {
    config.validate()?;
    if bounds.is_empty() {
        return Err(PhysicsError::EmptyDimension);
    }
    (0..config.count)
        .map(|_| {
            let mass = rng.gen_range(config.min_mass..=config.max_mass) as f64;
            let vel: Vector = bounds
                .iter()
                .map(|_| rng.gen_range(0..=config.max_speed) as f64)
                .collect::<Vec<_>>()
                .into();
            let pos: Vector = bounds
                .iter()
                .map(|&max| rng.gen_range(0..=max.floor() as u64) as f64)
                .collect::<Vec<_>>()
                .into();
            Body::new(mass, pos, vel, now)
        })
        .collect()
}
