//! Keeping bodies inside the box `[0, bounds]`.
//!
//! Reflection and removal are separate guards: reflection reacts as soon as a
//! coordinate leaves the box, removal only once it is more than `tolerance`
//! outside.

use crate::{body::Body, config::ReflectionMode};

/// Negates the velocity along `axis`, or with `inward_only` turns it to point
/// back into the box.
///
/// Returns whether the component changed sign. Plain negation flips a body
/// that is outside but already heading back, so it can stay trapped flipping
/// back and forth until it is removed; `inward_only` leaves such a body alone.
fn reflect_axis(body: &mut Body, axis: usize, inward_only: bool) -> bool {
    let v = body.vel[axis];
    let reflected = if !inward_only {
        -v
    } else if body.pos[axis] < 0.0 {
        v.abs()
    } else {
        -v.abs()
    };
    body.vel[axis] = reflected;
    reflected != v
}

/// Reflects `body` off any wall it has crossed, returning whether any velocity
/// component was flipped.
pub fn reflect(
    body: &mut Body,
    bounds: &[f64],
    mode: ReflectionMode,
    inward_only: bool,
) -> bool {
    if mode == ReflectionMode::Disabled {
        return false;
    }
    let outside: Vec<usize> = (0..body.dim().min(bounds.len()))
        .filter(|&axis| body.pos[axis] < 0.0 || body.pos[axis] > bounds[axis])
        .collect();
    match mode {
        ReflectionMode::Disabled => false,
        ReflectionMode::FirstAxis => outside
            .first()
            .is_some_and(|&axis| reflect_axis(body, axis, inward_only)),
        ReflectionMode::EveryAxis => outside.into_iter().fold(false, |flipped, axis| {
            reflect_axis(body, axis, inward_only) || flipped
        }),
    }
}

pub fn reflect_all(
    bodies: &mut [Body],
    bounds: &[f64],
    mode: ReflectionMode,
    inward_only: bool,
) -> usize {
    bodies
        .iter_mut()
        .map(|body| reflect(body, bounds, mode, inward_only))
        .filter(|&flipped| flipped)
        .count()
}

/// Whether `body` has drifted more than `tolerance` outside the box on any axis.
pub fn is_escaped(body: &Body, bounds: &[f64], tolerance: f64) -> bool {
    body.pos
        .iter()
        .zip(bounds)
        .any(|(&x, &max)| x < -tolerance || x > max + tolerance)
}

/// Drops every escaped body, keeping the others in order. Returns how many went.
pub fn remove_escaped(bodies: &mut Vec<Body>, bounds: &[f64], tolerance: f64) -> usize {
    let before = bodies.len();
    bodies.retain(|body| {
        let escaped = is_escaped(body, bounds, tolerance);
        if escaped {
            log::trace!("Removing escaped body at {:?}", body.pos.as_slice());
        }
        !escaped
    });
    before - bodies.len()
}
