// src/vector2.rs
//! The 2-D specialization of [`VecN`]. Only the dimension is fixed. There is
//! no 2D cross product: `to_vecn().cross_prod(..)` reports `NotImplemented`
//! like any other non-3D vector.

use crate::fixed::impl_fixed_vector;
use crate::nd::relation;
use crate::nd::types::Scalar;
#[cfg(feature = "serde")]
use crate::nd::vecn::VecN;

/// A 2-D Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VecN", into = "VecN"))]
pub struct Vec2 {
    data: [Scalar; 2],
}

impl_fixed_vector!(Vec2, 2);

impl Vec2 {
    #[inline(always)]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { data: [x, y] }
    }

    #[inline(always)]
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    #[inline(always)]
    pub fn y(&self) -> Scalar {
        self.data[1]
    }

    /// Ratio-based collinearity, same rule as [`VecN::collinear`](crate::VecN::collinear).
    #[inline]
    pub fn collinear(&self, other: &Vec2) -> bool {
        relation::collinear_by_ratio(&self.data, &other.data)
    }

    /// Collinear and pointing the opposite way. The zero vector is
    /// anticollinear with every vector.
    pub fn anticollinear(&self, other: &Vec2) -> bool {
        self.collinear(other) && relation::no_same_sign_pairs(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Vec2::from_slice(&[1.0, 1.0, 1.0]),
            Err(VectorError::InvalidDimension { expected: 2, actual: 3 })
        );
        assert_eq!(Vec2::try_from(vec![1.0, 2.0]).unwrap().dims(), 2);
    }

    #[test]
    fn perpendicular() {
        assert!(Vec2::new(1.0, 0.0).perpendicular(&Vec2::new(0.0, 2.0)));
        assert!(!Vec2::new(1.0, 2.0).perpendicular(&Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn relations_and_generic_view() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(-2.0, 4.0);
        assert!(a.anticollinear(&b));
        assert!(Vec2::zero().anticollinear(&Vec2::new(1.0, 2.0)));
        assert!(matches!(
            a.to_vecn().cross_prod(&b.to_vecn()),
            Err(VectorError::NotImplemented { dims: 2, .. })
        ));
    }
}
