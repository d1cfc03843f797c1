//! Perfectly inelastic merging of overlapping bodies.

use crate::{body::Body, vector};

/// Bodies collide when their centers are closer than the sum of their radii.
pub fn collides(a: &Body, b: &Body) -> bool {
    vector::distance(&a.pos, &b.pos) < a.radius() + b.radius()
}

/// Folds `absorbed` into `survivor`, conserving mass and momentum.
pub fn merge(survivor: &mut Body, absorbed: &Body) {
    survivor.gain_mass(absorbed.mass());
    let weight_absorbed = absorbed.mass() / survivor.mass();
    let weight_survivor = 1.0 - weight_absorbed;
    survivor.vel = &(&survivor.vel * weight_survivor) + &(&absorbed.vel * weight_absorbed);
}

/// Merges every colliding pair, returning how many merges happened.
///
/// Pairs are scanned once in `(i, j)` order with `i < j`. A merge folds `j`
/// into `i` on the spot and removes `j`, so the body that slides into slot
/// `j` is checked against `i` next; no remaining pair is skipped or revisited.
pub fn resolve_collisions(bodies: &mut Vec<Body>) -> usize {
    let mut merges = 0;
    let mut i = 0;
    while i < bodies.len() {
        let mut j = i + 1;
        while j < bodies.len() {
            if collides(&bodies[i], &bodies[j]) {
                let absorbed = bodies.remove(j);
                log::trace!(
                    "Merging body of mass {} into body {i} of mass {}",
                    absorbed.mass(),
                    bodies[i].mass()
                );
                merge(&mut bodies[i], &absorbed);
                merges += 1;
            } else {
                j += 1;
            }
        }
        i += 1;
    }
    merges
}
