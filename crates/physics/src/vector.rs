//! Dimension-agnostic real vectors and the elementwise operations the rest of
//! the crate is built on.
//!
//! Binary operations over two vectors of different lengths yield a vector of
//! the shorter length. Nothing in a [`crate::Simulation`] ever relies on that:
//! dimensions are checked once, when a body enters the simulation.

use cgmath::Vector2;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector(Vec<f64>);

impl Vector {
    pub fn zeros(dim: usize) -> Self {
        Self::filled(dim, 0.0)
    }
    /// A vector of length `dim` with every component set to `value`.
    pub fn filled(dim: usize, value: f64) -> Self {
        Self(vec![value; dim])
    }
    pub fn dim(&self) -> usize {
        self.0.len()
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
    pub fn sum_of_squares(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum()
    }
    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }
    pub fn scaled(&self, factor: f64) -> Self {
        scalar_rhs(self, factor, |x, s| x * s)
    }
    pub fn negated(&self) -> Self {
        scalar_rhs(self, -1.0, |x, s| x * s)
    }
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
    /// Lossy view for 2-D hosts: missing components read as zero.
    pub fn to_vector2(&self) -> Vector2<f64> {
        let at = |i: usize| self.0.get(i).copied().unwrap_or(0.0);
        Vector2::new(at(0), at(1))
    }
}

/// Applies `op` pairwise; the result has the length of the shorter input.
pub fn zip_with(a: &Vector, b: &Vector, op: impl Fn(f64, f64) -> f64) -> Vector {
    Vector(a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect())
}

/// `op(scalar, v[i])` for every component.
pub fn scalar_lhs(scalar: f64, v: &Vector, op: impl Fn(f64, f64) -> f64) -> Vector {
    Vector(v.iter().map(|&x| op(scalar, x)).collect())
}

/// `op(v[i], scalar)` for every component.
pub fn scalar_rhs(v: &Vector, scalar: f64, op: impl Fn(f64, f64) -> f64) -> Vector {
    Vector(v.iter().map(|&x| op(x, scalar)).collect())
}

/// Componentwise sum of many vectors, starting from the zero vector of `dim`.
pub fn sum_vectors<'a>(vectors: impl IntoIterator<Item = &'a Vector>, dim: usize) -> Vector {
    vectors
        .into_iter()
        .fold(Vector::zeros(dim), |acc, v| zip_with(&acc, v, |x, y| x + y))
}

pub fn distance(a: &Vector, b: &Vector) -> f64 {
    zip_with(a, b, |x, y| x - y).norm()
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}
impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl Add for &Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Vector {
        zip_with(self, rhs, |x, y| x + y)
    }
}
impl Sub for &Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Vector {
        zip_with(self, rhs, |x, y| x - y)
    }
}
impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.negated()
    }
}
impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        scalar_rhs(self, rhs, |x, s| x * s)
    }
}
impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        scalar_rhs(self, rhs, |x, s| x / s)
    }
}
impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        *self = zip_with(self, rhs, |x, y| x + y);
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}
impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_with_truncates_to_shorter() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([10.0, 20.0]);
        assert_eq!(zip_with(&a, &b, |x, y| x + y), Vector::from([11.0, 22.0]));
        assert_eq!(zip_with(&b, &a, |x, y| x + y).dim(), 2);
    }

    #[test]
    fn scalar_forms_keep_operand_order() {
        let v = Vector::from([2.0, 4.0]);
        assert_eq!(scalar_lhs(8.0, &v, |s, x| s / x), Vector::from([4.0, 2.0]));
        assert_eq!(scalar_rhs(&v, 2.0, |x, s| x / s), Vector::from([1.0, 2.0]));
        assert_eq!(scalar_lhs(1.0, &v, |s, x| s - x), Vector::from([-1.0, -3.0]));
        assert_eq!(scalar_rhs(&v, 1.0, |x, s| x - s), Vector::from([1.0, 3.0]));
    }

    #[test]
    fn reductions() {
        let v = Vector::from([3.0, 4.0]);
        assert_eq!(v.sum(), 7.0);
        assert_eq!(v.sum_of_squares(), 25.0);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(distance(&Vector::zeros(2), &v), 5.0);
    }

    #[test]
    fn sum_vectors_of_empty_set_is_zero() {
        assert_eq!(sum_vectors(std::iter::empty(), 3), Vector::zeros(3));
        let vs = [Vector::from([1.0, -1.0]), Vector::from([2.0, 5.0])];
        assert_eq!(sum_vectors(&vs, 2), Vector::from([3.0, 4.0]));
    }

    #[test]
    fn to_vector2_pads_and_truncates() {
        assert_eq!(Vector::from([1.5, -2.0]).to_vector2(), Vector2::new(1.5, -2.0));
        assert_eq!(Vector::from([7.0]).to_vector2(), Vector2::new(7.0, 0.0));
        assert_eq!(Vector::from([1.0, 2.0, 3.0]).to_vector2(), Vector2::new(1.0, 2.0));
    }
}
