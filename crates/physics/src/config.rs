use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How bodies bounce off the walls of the bounding box `[0, bounds]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionMode {
    Disabled,
    /// Only the first out-of-range axis is reflected per tick
    #[default]
    FirstAxis,
    /// Every out-of-range axis is reflected independently
    EveryAxis,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scales every pairwise force; a tuning knob, not a physical constant.
    pub gravitational_constant: f64,
    /// Divides elapsed wall time (in milliseconds) before integration.
    pub slow_down: f64,
    /// Upper corner of the bounding box; the lower corner is the origin.
    /// Its length fixes the dimension of every body in the simulation.
    pub bounds: Vec<f64>,
    /// How far past the box a body may drift before it is removed.
    pub boundary_tolerance: f64,
    pub collisions_enabled: bool,
    pub reflection: ReflectionMode,
    /// Only turn velocities that point away from the box. By default an
    /// out-of-range component is negated whichever way it points.
    pub reflect_inward_only: bool,
    pub remove_escaped: bool,
    /// Evaluate force rows on the rayon pool (needs the `rayon` feature).
    pub parallel_forces: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.4,
            slow_down: 12.0,
            bounds: vec![1280.0, 720.0],
            boundary_tolerance: 10.0,
            collisions_enabled: true,
            reflection: ReflectionMode::FirstAxis,
            reflect_inward_only: false,
            remove_escaped: true,
            parallel_forces: false,
        }
    }
}

impl SimulationConfig {
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(self.gravitational_constant) {
            return Err(PhysicsError::InvalidConfig(format!(
                "gravitational_constant must be positive, got {}",
                self.gravitational_constant
            )));
        }
        if !positive(self.slow_down) {
            return Err(PhysicsError::InvalidConfig(format!(
                "slow_down must be positive, got {}",
                self.slow_down
            )));
        }
        if !(self.boundary_tolerance.is_finite() && self.boundary_tolerance >= 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "boundary_tolerance must be non-negative, got {}",
                self.boundary_tolerance
            )));
        }
        if self.bounds.is_empty() {
            return Err(PhysicsError::EmptyDimension);
        }
        if let Some(bad) = self.bounds.iter().find(|&&b| !positive(b)) {
            return Err(PhysicsError::InvalidConfig(format!(
                "bounds must be positive, got {bad}"
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PhysicsError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PhysicsError::ConfigParse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PhysicsError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Config file {} not found. Using defaults.", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .map_err(|e| PhysicsError::ConfigIo(format!("{}: {e}", path.display())))
    }
}
