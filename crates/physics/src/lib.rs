use instant::Instant;

pub mod boundary;
pub mod collision;
pub mod config;
pub mod error;
pub mod force;
pub mod integrator;
pub mod spawn;
pub mod vector;

mod body;
pub use body::{radius_for_mass, Body};
pub use config::{ReflectionMode, SimulationConfig};
pub use error::{PhysicsError, Result};
pub use force::ForceMatrix;
pub use spawn::{spawn_bodies, SpawnConfig};
pub use vector::Vector;

/// A set of bodies and the parameters they evolve under.
///
/// Every body shares the dimension of `config.bounds`; that is checked once,
/// when a body is added.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    bodies: Vec<Body>,
}

/// What one call to [`Simulation::tick`] did.
#[derive(Clone, Debug)]
pub struct Tick {
    /// Forces between the bodies as they were at the start of the tick.
    ///
    /// Indexed by *pre-tick* body indices: after merges or removals,
    /// `forces.get(i, j)` no longer lines up with `Simulation::bodies()[i]`.
    pub forces: ForceMatrix,
    pub bodies_before: usize,
    pub merges: usize,
    pub removals: usize,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
        })
    }
    pub fn with_bodies(
        config: SimulationConfig,
        bodies: impl IntoIterator<Item = Body>,
    ) -> Result<Self> {
        let mut simulation = Self::new(config)?;
        for body in bodies {
            simulation.add_body(body)?;
        }
        Ok(simulation)
    }
    /// Adds `body`, returning its index.
    pub fn add_body(&mut self, body: Body) -> Result<usize> {
        body.check_dim(self.config.dim())?;
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }
    pub fn total_momentum(&self) -> Vector {
        self.bodies
            .iter()
            .fold(Vector::zeros(self.config.dim()), |acc, body| &acc + &body.momentum())
    }

    /// Mass-weighted mean position, or `None` without bodies.
    pub fn centre_of_mass(&self) -> Option<Vector> {
        if self.bodies.is_empty() {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(Vector::zeros(self.config.dim()), |acc, body| {
                &acc + &(&body.pos * body.mass())
            });
        Some(&weighted / self.total_mass())
    }

    fn compute_forces(&self) -> ForceMatrix {
        let g = self.config.gravitational_constant;
        #[cfg(feature = "rayon")]
        {
            if self.config.parallel_forces {
                return ForceMatrix::compute_parallel(&self.bodies, g);
            }
        }
        ForceMatrix::compute(&self.bodies, g)
    }

    /// Advances every body to `now`: forces, integration, merging, then the walls.
    ///
    /// On error nothing has been modified.
    pub fn tick(&mut self, now: Instant) -> Result<Tick> {
        let bodies_before = self.bodies.len();
        let forces = self.compute_forces();
        let mut bodies =
            integrator::stepped(&self.bodies, &forces, now, self.config.slow_down)?;
        let merges = if self.config.collisions_enabled {
            collision::resolve_collisions(&mut bodies)
        } else {
            0
        };
        if let Some(index) = bodies.iter().position(|body| !body.is_finite()) {
            return Err(PhysicsError::NonFinite { index });
        }
        boundary::reflect_all(
            &mut bodies,
            &self.config.bounds,
            self.config.reflection,
            self.config.reflect_inward_only,
        );
        let removals = if self.config.remove_escaped {
            boundary::remove_escaped(
                &mut bodies,
                &self.config.bounds,
                self.config.boundary_tolerance,
            )
        } else {
            0
        };
        self.bodies = bodies;
        log::debug!(
            "Tick: {bodies_before} -> {} bodies ({merges} merges, {removals} removals)",
            self.bodies.len()
        );
        Ok(Tick {
            forces,
            bodies_before,
            merges,
            removals,
        })
    }
}
