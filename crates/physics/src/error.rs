use std::fmt;

/// Precondition failures surfaced by the physics core.
///
/// None of these are transient: a tick is a deterministic computation on the
/// state handed to it, so a failure means the input was wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass is zero, negative or not finite
    InvalidMass { mass: f64 },
    /// A vector's dimension differs from the simulation's, or a force matrix
    /// was built for a different number of bodies
    DimensionMismatch { expected: usize, found: usize },
    /// Stepping body `index` overflowed to an infinite or NaN state
    NonFinite { index: usize },
    /// Positions, velocities and bounds need at least one component
    EmptyDimension,
    InvalidConfig(String),
    ConfigIo(String),
    ConfigParse(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass { mass } => {
                write!(f, "Invalid mass {mass}: mass must be finite and positive")
            }
            PhysicsError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }
            PhysicsError::NonFinite { index } => {
                write!(f, "Body {index} left the representable range of f64")
            }
            PhysicsError::EmptyDimension => write!(f, "Vectors must have at least one component"),
            PhysicsError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            PhysicsError::ConfigIo(msg) => write!(f, "Failed to access configuration: {msg}"),
            PhysicsError::ConfigParse(msg) => write!(f, "Failed to parse configuration: {msg}"),
        }
    }
}

impl std::error::Error for PhysicsError {}

pub type Result<T> = std::result::Result<T, PhysicsError>;
