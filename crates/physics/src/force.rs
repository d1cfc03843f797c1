//! Pairwise gravitational forces.
//!
//! The force matrix is dense and antisymmetric: cell `(i, j)` is the force on
//! body `i` exerted by body `j`, cell `(j, i)` its negation, and the diagonal
//! is zero. Each unordered pair is evaluated exactly once.

use crate::{
    body::Body,
    vector::{self, Vector},
};

/// Force on `on` exerted by `by`, pointing from `on` towards `by`.
///
/// Coincident bodies exert no force on each other.
pub fn pairwise_force(on: &Body, by: &Body, gravity_constant: f64) -> Vector {
    let rel_pos = &by.pos - &on.pos;
    let distance = rel_pos.norm();
    if distance == 0.0 {
        return Vector::zeros(rel_pos.dim());
    }
    let magnitude = gravity_constant * on.mass() * by.mass() / (distance * distance);
    &rel_pos * (magnitude / distance)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForceMatrix {
    len: usize,
    dim: usize,
    cells: Vec<Vector>,
}

impl ForceMatrix {
    fn zeroed(len: usize, dim: usize) -> Self {
        Self {
            len,
            dim,
            cells: vec![Vector::zeros(dim); len * len],
        }
    }

    fn dim_of(bodies: &[Body]) -> usize {
        bodies.first().map_or(0, Body::dim)
    }

    fn set_pair(&mut self, i: usize, j: usize, force_on_i: Vector) {
        self.cells[j * self.len + i] = force_on_i.negated();
        self.cells[i * self.len + j] = force_on_i;
    }

    pub fn compute(bodies: &[Body], gravity_constant: f64) -> Self {
        let mut matrix = Self::zeroed(bodies.len(), Self::dim_of(bodies));
        for (i, on) in bodies.iter().enumerate() {
            for (j, by) in bodies.iter().enumerate().skip(i + 1) {
                matrix.set_pair(i, j, pairwise_force(on, by, gravity_constant));
            }
        }
        matrix
    }

    /// Same result as [`ForceMatrix::compute`], with the upper-triangle rows
    /// evaluated on the rayon pool. The matrix is only assembled once every
    /// row has finished.
    #[cfg(feature = "rayon")]
    pub fn compute_parallel(bodies: &[Body], gravity_constant: f64) -> Self {
        use rayon::prelude::{IntoParallelIterator, ParallelIterator};

        let rows: Vec<Vec<Vector>> = (0..bodies.len())
            .into_par_iter()
            .map(|i| {
                bodies[i + 1..]
                    .iter()
                    .map(|by| pairwise_force(&bodies[i], by, gravity_constant))
                    .collect()
            })
            .collect();
        let mut matrix = Self::zeroed(bodies.len(), Self::dim_of(bodies));
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, force) in row.into_iter().enumerate() {
                matrix.set_pair(i, i + 1 + offset, force);
            }
        }
        matrix
    }

    /// Number of bodies the matrix was computed for.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn dim(&self) -> usize {
        self.dim
    }
    pub fn get(&self, i: usize, j: usize) -> &Vector {
        &self.cells[i * self.len + j]
    }
    pub fn row(&self, i: usize) -> &[Vector] {
        &self.cells[i * self.len..(i + 1) * self.len]
    }
    /// Sum of all forces acting on body `i`.
    pub fn net_force(&self, i: usize) -> Vector {
        vector::sum_vectors(self.row(i), self.dim)
    }
    /// Symmetric table of force magnitudes, for shading links between bodies.
    pub fn magnitudes(&self) -> Vec<Vec<f64>> {
        (0..self.len)
            .map(|i| self.row(i).iter().map(Vector::norm).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instant::Instant;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn body(mass: f64, pos: [f64; 2]) -> Body {
        Body::at_rest(mass, pos, Instant::now()).unwrap()
    }

    fn random_bodies(count: usize, seed: u64) -> Vec<Body> {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Instant::now();
        (0..count)
            .map(|_| {
                let pos = [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)];
                Body::at_rest(rng.gen_range(1.0..10.0), pos, now).unwrap()
            })
            .collect()
    }

    #[test]
    fn force_points_towards_other_body() {
        let a = body(10.0, [0.0, 0.0]);
        let b = body(10.0, [10.0, 0.0]);
        let f = pairwise_force(&a, &b, 1.0);
        assert!((f[0] - 1.0).abs() < 1e-12);
        assert_eq!(f[1], 0.0);
    }

    #[test]
    fn inverse_square_falloff() {
        let a = body(2.0, [0.0, 0.0]);
        let near = pairwise_force(&a, &body(3.0, [0.0, 1.0]), 0.5).norm();
        let far = pairwise_force(&a, &body(3.0, [0.0, 2.0]), 0.5).norm();
        assert!((near - 3.0).abs() < 1e-12);
        assert!((near / far - 4.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_bodies_exert_no_force() {
        let bodies = vec![body(4.0, [3.0, 3.0]), body(9.0, [3.0, 3.0])];
        let forces = ForceMatrix::compute(&bodies, 1.0);
        assert_eq!(forces.get(0, 1), &Vector::zeros(2));
        assert_eq!(forces.get(1, 0), &Vector::zeros(2));
        assert!(forces.net_force(0).is_finite());
    }

    #[test]
    fn matrix_is_antisymmetric_with_zero_diagonal() {
        let bodies = random_bodies(25, 7);
        let forces = ForceMatrix::compute(&bodies, 0.4);
        assert_eq!(forces.len(), 25);
        for i in 0..forces.len() {
            assert_eq!(forces.get(i, i), &Vector::zeros(2));
            for j in 0..forces.len() {
                assert_eq!(forces.get(i, j), &forces.get(j, i).negated());
            }
        }
    }

    #[test]
    fn net_forces_cancel_overall() {
        let bodies = random_bodies(12, 3);
        let forces = ForceMatrix::compute(&bodies, 1.0);
        let total = (0..forces.len()).fold(Vector::zeros(2), |acc, i| &acc + &forces.net_force(i));
        assert!(total.norm() < 1e-8);
    }

    #[test]
    fn magnitudes_are_symmetric() {
        let forces = ForceMatrix::compute(&random_bodies(6, 11), 1.0);
        let table = forces.magnitudes();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(table[i][j], table[j][i]);
            }
        }
    }

    #[test]
    fn empty_and_single_body_sets() {
        assert!(ForceMatrix::compute(&[], 1.0).is_empty());
        let forces = ForceMatrix::compute(&[body(1.0, [0.0, 0.0])], 1.0);
        assert_eq!(forces.net_force(0), Vector::zeros(2));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let bodies = random_bodies(40, 42);
        assert_eq!(
            ForceMatrix::compute_parallel(&bodies, 0.4),
            ForceMatrix::compute(&bodies, 0.4)
        );
    }
}
