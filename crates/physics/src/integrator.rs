//! Symplectic Euler stepping of each body against its row of the force matrix.
//!
//! Velocity is advanced first from the start-of-step acceleration, then the
//! position is advanced with the *new* velocity:
//!
//! ```text
//! v(t+dt) = v(t) + F/m * dt
//! x(t+dt) = x(t) + v(t+dt) * dt
//! ```
//!
//! Swapping the two updates gives explicit Euler, whose energy drifts.

use crate::{
    body::{check_mass, Body},
    error::{PhysicsError, Result},
    force::ForceMatrix,
    vector::{self, Vector},
};
use instant::Instant;

/// Wall time between `since` and `now` in milliseconds, or zero if `now` is earlier.
pub fn elapsed_millis(since: Instant, now: Instant) -> f64 {
    now.checked_duration_since(since)
        .unwrap_or_default()
        .as_secs_f64()
        * 1000.0
}

/// Advances `body` to `now` under `net_force`.
pub fn integrate(body: &mut Body, net_force: &Vector, now: Instant, slow_down: f64) -> Result<()> {
    check_mass(body.mass())?;
    let dt = elapsed_millis(body.last_update, now) / slow_down;
    let accel = vector::scalar_rhs(net_force, body.mass(), |f, m| f / m);
    body.vel += &(&accel * dt);
    body.pos += &(&body.vel * dt);
    body.last_update = now;
    Ok(())
}

/// Returns every body advanced to `now` using its row of `forces`, leaving
/// `bodies` itself alone.
///
/// Fails if `forces` was built for a different number of bodies, if any mass
/// is invalid, or if a stepped body is no longer finite.
pub fn stepped(
    bodies: &[Body],
    forces: &ForceMatrix,
    now: Instant,
    slow_down: f64,
) -> Result<Vec<Body>> {
    if bodies.len() != forces.len() {
        return Err(PhysicsError::DimensionMismatch {
            expected: forces.len(),
            found: bodies.len(),
        });
    }
    bodies
        .iter()
        .enumerate()
        .map(|(index, body)| {
            let mut next = body.clone();
            integrate(&mut next, &forces.net_force(index), now, slow_down)?;
            if !next.is_finite() {
                return Err(PhysicsError::NonFinite { index });
            }
            Ok(next)
        })
        .collect()
}

/// Integrates every body in place using its row of `forces`.
///
/// An error leaves the bodies exactly as they were.
pub fn integrate_all(
    bodies: &mut [Body],
    forces: &ForceMatrix,
    now: Instant,
    slow_down: f64,
) -> Result<()> {
    let next = stepped(bodies, forces, now, slow_down)?;
    for (body, next) in bodies.iter_mut().zip(next) {
        *body = next;
    }
    Ok(())
}
