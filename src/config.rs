use physics::{PhysicsError, SimulationConfig, SpawnConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything one run of the binary needs, as read from a TOML file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub spawn: SpawnConfig,
    pub driver: DriverConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// Spawn a fresh population once fewer bodies than this remain.
    pub respawn_below: usize,
    pub frame_ms: u64,
    pub max_ticks: Option<u64>,
    pub seed: Option<u64>,
    pub realtime: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            respawn_below: 20,
            frame_ms: 16,
            max_ticks: Some(10_000),
            seed: None,
            realtime: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.simulation.validate()?;
        self.spawn.validate()?;
        if self.driver.frame_ms == 0 {
            return Err(PhysicsError::InvalidConfig("frame_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PhysicsError> {
        let config: Self =
            toml::from_str(content).map_err(|e| PhysicsError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PhysicsError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_optional() {
        let config = Config::from_toml_str(
            r#"
            [simulation]
            gravitational_constant = 2.0

            [driver]
            respawn_below = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.gravitational_constant, 2.0);
        assert_eq!(config.driver.respawn_below, 5);
        assert_eq!(config.spawn, SpawnConfig::default());
    }

    #[test]
    fn invalid_nested_values_are_rejected() {
        assert!(Config::from_toml_str("[spawn]\nmin_mass = 0").is_err());
        assert!(Config::from_toml_str("[driver]\nframe_ms = 0").is_err());
    }
}
