use crate::{
    error::{PhysicsError, Result},
    vector::Vector,
};
use instant::Instant;

/// Mass grows with the cube of the radius, so radius is the cube root of mass.
pub fn radius_for_mass(mass: f64) -> f64 {
    mass.cbrt()
}

pub(crate) fn check_mass(mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass { mass })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f64,
    radius: f64,
    pub pos: Vector,
    pub vel: Vector,
    /// When this body was last integrated.
    pub last_update: Instant,
}

impl Body {
    pub fn new(
        mass: f64,
        pos: impl Into<Vector>,
        vel: impl Into<Vector>,
        spawned_at: Instant,
    ) -> Result<Body> {
        check_mass(mass)?;
        let (pos, vel) = (pos.into(), vel.into());
        if pos.dim() == 0 {
            return Err(PhysicsError::EmptyDimension);
        }
        if vel.dim() != pos.dim() {
            return Err(PhysicsError::DimensionMismatch {
                expected: pos.dim(),
                found: vel.dim(),
            });
        }
        Ok(Body {
            mass,
            radius: radius_for_mass(mass),
            pos,
            vel,
            last_update: spawned_at,
        })
    }
    pub fn at_rest(mass: f64, pos: impl Into<Vector>, spawned_at: Instant) -> Result<Body> {
        let pos = pos.into();
        let vel = Vector::zeros(pos.dim());
        Body::new(mass, pos, vel, spawned_at)
    }
    pub fn mass(&self) -> f64 {
        self.mass
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn dim(&self) -> usize {
        self.pos.dim()
    }
    /// Checks that both position and velocity have `dim` components.
    pub fn check_dim(&self, dim: usize) -> Result<()> {
        for found in [self.pos.dim(), self.vel.dim()] {
            if found != dim {
                return Err(PhysicsError::DimensionMismatch {
                    expected: dim,
                    found,
                });
            }
        }
        Ok(())
    }
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite() && self.pos.is_finite() && self.vel.is_finite()
    }
    pub fn momentum(&self) -> Vector {
        &self.vel * self.mass
    }
    /// Adds `mass` and recomputes the radius. Callers guarantee `mass > 0`.
    pub(crate) fn gain_mass(&mut self, mass: f64) {
        self.mass += mass;
        self.radius = radius_for_mass(self.mass);
    }
    #[cfg(test)]
    pub(crate) fn set_mass_unchecked(&mut self, mass: f64) {
        self.mass = mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_monotonic_in_mass() {
        let masses = [1e-6, 0.5, 1.0, 2.0, 5.0, 10.0, 1e3, 1e9];
        for pair in masses.windows(2) {
            assert!(radius_for_mass(pair[0]) <= radius_for_mass(pair[1]));
        }
        assert!(radius_for_mass(1e-6) > 0.0);
    }

    #[test]
    fn rejects_non_positive_and_non_finite_mass() {
        let now = Instant::now();
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Body::at_rest(mass, [0.0, 0.0], now),
                Err(PhysicsError::InvalidMass { .. })
            ));
        }
    }

    #[test]
    fn rejects_mismatched_velocity() {
        let err = Body::new(1.0, [0.0, 0.0], [1.0, 0.0, 0.0], Instant::now()).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Body::at_rest(1.0, Vector::zeros(0), Instant::now()).unwrap_err(),
            PhysicsError::EmptyDimension
        );
    }

    #[test]
    fn dimension_check_covers_velocity() {
        let mut body = Body::new(1.0, [0.0, 0.0], [1.0, 1.0], Instant::now()).unwrap();
        assert_eq!(body.check_dim(2), Ok(()));
        assert_eq!(
            body.check_dim(3),
            Err(PhysicsError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        body.vel = Vector::from([1.0]);
        assert_eq!(
            body.check_dim(2),
            Err(PhysicsError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn gaining_mass_grows_radius() {
        let mut body = Body::at_rest(1.0, [0.0, 0.0], Instant::now()).unwrap();
        let before = body.radius();
        body.gain_mass(7.0);
        assert_eq!(body.mass(), 8.0);
        assert!((body.radius() - 2.0).abs() < 1e-12);
        assert!(body.radius() > before);
    }
}
