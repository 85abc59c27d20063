// src/vector.rs
//! The 3-D specialization of [`VecN`].
//!
//! `Vec3` is a `Copy` value holding its three components inline. It carries
//! the common fixed-size surface (see `fixed.rs`) plus the operations that
//! only make sense in three dimensions: cross product, mixed product, and
//! the cross-product collinearity test. None of them can fail. Use
//! [`Vec3::to_vecn`] for the generic, fallible view.

use crate::fixed::impl_fixed_vector;
use crate::nd::relation;
use crate::nd::types::Scalar;
#[cfg(feature = "serde")]
use crate::nd::vecn::VecN;

/// Orientation of the basis a cross product is taken in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    #[default]
    Right,
    /// Left-handed basis: the cross product flips sign.
    Left,
}

/// A 3-D Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VecN", into = "VecN"))]
pub struct Vec3 {
    data: [Scalar; 3],
}

impl_fixed_vector!(Vec3, 3);

impl Vec3 {
    /// Create a new `Vec3` from components.
    #[inline(always)]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { data: [x, y, z] }
    }

    #[inline(always)]
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    #[inline(always)]
    pub fn y(&self) -> Scalar {
        self.data[1]
    }

    #[inline(always)]
    pub fn z(&self) -> Scalar {
        self.data[2]
    }

    /// Right-handed cross product.
    #[inline(always)]
    pub fn cross_prod(&self, other: &Vec3) -> Vec3 {
        Vec3 { data: relation::cross3(self.data, other.data) }
    }

    /// Cross product in the given basis. A left-handed basis negates every
    /// component of the right-handed result.
    pub fn cross_prod_in(&self, other: &Vec3, basis: Handedness) -> Vec3 {
        let c = self.cross_prod(other);
        match basis {
            Handedness::Right => c,
            Handedness::Left => c * -1.0,
        }
    }

    /// Scalar triple product `self · (a × b)`.
    #[inline]
    pub fn mixed_prod(&self, a: &Vec3, b: &Vec3) -> Scalar {
        self.dot(&a.cross_prod(b))
    }

    /// `true` if `‖self × other‖` is exactly zero.
    #[inline]
    pub fn collinear(&self, other: &Vec3) -> bool {
        self.cross_prod(other).norm() == 0.0
    }

    /// Collinear and pointing the opposite way.
    ///
    /// The zero vector is collinear with everything and has no same-signed
    /// components, so it is anticollinear with every vector.
    pub fn anticollinear(&self, other: &Vec3) -> bool {
        self.collinear(other) && relation::no_same_sign_pairs(&self.data, &other.data)
    }
}
