// src/nd/vecn.rs
//! N-dimensional Euclidean vector type and its operations.
//!
//! The dimension is a runtime property: it is fixed when the vector is built
//! and every operation returns a fresh vector instead of mutating the
//! receiver. Binary operations check that both operands share a dimension.

use crate::error::{Result, VectorError};
use crate::nd::relation;
use crate::nd::types::Scalar;
use crate::vector::{Handedness, Vec3};
use std::fmt;
use std::ops::{Mul, Neg};
use tracing::debug;

/// An N-dimensional Euclidean vector with a runtime dimension.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VecN {
    data: Vec<Scalar>,
}

impl VecN {
    /// Construct from owned components.
    #[inline]
    pub fn new(data: Vec<Scalar>) -> Self {
        Self { data }
    }

    /// The zero-dimensional vector.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The zero vector of dimension `n`.
    #[inline]
    pub fn zero(n: usize) -> Self {
        Self::filled(n, 0.0)
    }

    /// A vector of dimension `n` with every component set to `value`.
    #[inline]
    pub fn filled(n: usize, value: Scalar) -> Self {
        Self { data: vec![value; n] }
    }

    /// Number of components.
    #[inline]
    pub fn dims(&self) -> usize {
        self.data.len()
    }

    /// Component `i`.
    pub fn get(&self, i: usize) -> Result<Scalar> {
        self.data.get(i).copied().ok_or_else(|| {
            debug!(index = i, dims = self.dims(), "component index out of bounds");
            VectorError::IndexOutOfBounds { index: i, dims: self.dims() }
        })
    }

    /// Borrow the components.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Copy of the components.
    #[inline]
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.clone()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// `true` if every component is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        relation::is_zero(&self.data)
    }

    /// Apply `f` to every component.
    pub fn map<F: FnMut(Scalar) -> Scalar>(&self, f: F) -> Self {
        Self { data: self.data.iter().copied().map(f).collect() }
    }

    /// `self + other`.
    pub fn add(&self, other: &VecN) -> Result<VecN> {
        self.add_all(std::iter::once(other))
    }

    /// `self + Σ addends`. With no addends the result is a copy of `self`.
    pub fn add_all<'a, I>(&self, addends: I) -> Result<VecN>
    where
        I: IntoIterator<Item = &'a VecN>,
    {
        let mut acc = self.data.clone();
        for v in addends {
            self.check_dims(v, "add")?;
            for (a, b) in acc.iter_mut().zip(&v.data) {
                *a += *b;
            }
        }
        Ok(VecN { data: acc })
    }

    /// `self - other`.
    pub fn sub(&self, other: &VecN) -> Result<VecN> {
        self.sub_all(std::iter::once(other))
    }

    /// Subtract each of `subtrahends` from `self`, left to right.
    pub fn sub_all<'a, I>(&self, subtrahends: I) -> Result<VecN>
    where
        I: IntoIterator<Item = &'a VecN>,
    {
        let mut acc = self.data.clone();
        for v in subtrahends {
            self.check_dims(v, "sub")?;
            for (a, b) in acc.iter_mut().zip(&v.data) {
                *a -= *b;
            }
        }
        Ok(VecN { data: acc })
    }

    /// Multiply every component by `s`.
    #[inline]
    pub fn scale(&self, s: Scalar) -> VecN {
        self.map(|x| x * s)
    }

    /// Divide every component by `s`. Dividing by zero follows IEEE-754.
    #[inline]
    pub fn div(&self, s: Scalar) -> VecN {
        self.map(|x| x / s)
    }

    /// Dot product.
    pub fn dot(&self, other: &VecN) -> Result<Scalar> {
        self.check_dims(other, "dot")?;
        Ok(self.dot_unchecked(other))
    }

    /// Euclidean norm (length).
    #[inline]
    pub fn norm(&self) -> Scalar {
        self.dot_unchecked(self).sqrt()
    }

    /// Exact componentwise equality. Vectors of different dimension are
    /// never equal.
    #[inline]
    pub fn equal(&self, other: &VecN) -> bool {
        self == other
    }

    /// `true` if the dot product is exactly zero.
    pub fn perpendicular(&self, other: &VecN) -> Result<bool> {
        Ok(self.dot(other)? == 0.0)
    }

    /// Ratio-based collinearity test.
    ///
    /// A zero vector (every component `0`) is collinear with anything.
    /// Otherwise zero components must sit at the same indices in both
    /// vectors, and the ratio of the remaining pairs must be constant.
    pub fn collinear(&self, other: &VecN) -> Result<bool> {
        self.check_dims(other, "collinear")?;
        Ok(relation::collinear_by_ratio(&self.data, &other.data))
    }

    /// Collinear and pointing the opposite way.
    ///
    /// The zero vector is collinear with everything and has no same-signed
    /// components, so it is anticollinear with every vector of its dimension.
    pub fn anticollinear(&self, other: &VecN) -> Result<bool> {
        Ok(self.collinear(other)? && relation::no_same_sign_pairs(&self.data, &other.data))
    }

    /// Right-handed cross product. Only defined for 3-dimensional vectors.
    pub fn cross_prod(&self, other: &VecN) -> Result<VecN> {
        self.cross_prod_in(other, Handedness::Right)
    }

    /// Cross product in the given basis orientation. Only defined for
    /// 3-dimensional vectors.
    pub fn cross_prod_in(&self, other: &VecN, basis: Handedness) -> Result<VecN> {
        let (a, b) = self.as_vec3_pair(other, "cross_prod")?;
        Ok(a.cross_prod_in(&b, basis).to_vecn())
    }

    /// Scalar triple product `self · (a × b)`. Only defined for
    /// 3-dimensional vectors.
    pub fn mixed_prod(&self, a: &VecN, b: &VecN) -> Result<Scalar> {
        let (this, a) = self.as_vec3_pair(a, "mixed_prod")?;
        self.check_dims(b, "mixed_prod")?;
        let b = Vec3::from_slice(b.as_slice())?;
        Ok(this.mixed_prod(&a, &b))
    }

    #[inline]
    fn dot_unchecked(&self, other: &VecN) -> Scalar {
        self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum()
    }

    pub(crate) fn check_dims(&self, other: &VecN, op: &'static str) -> Result<()> {
        if self.dims() != other.dims() {
            debug!(op, expected = self.dims(), actual = other.dims(), "dimension mismatch");
            return Err(VectorError::DimensionMismatch {
                op,
                expected: self.dims(),
                actual: other.dims(),
            });
        }
        Ok(())
    }

    fn as_vec3_pair(&self, other: &VecN, op: &'static str) -> Result<(Vec3, Vec3)> {
        if self.dims() != 3 {
            debug!(op, dims = self.dims(), "operation only defined in 3 dimensions");
            return Err(VectorError::NotImplemented { op, dims: self.dims() });
        }
        self.check_dims(other, op)?;
        Ok((Vec3::from_slice(&self.data)?, Vec3::from_slice(&other.data)?))
    }
}

impl From<Vec<Scalar>> for VecN {
    fn from(data: Vec<Scalar>) -> Self {
        Self::new(data)
    }
}

impl From<&[Scalar]> for VecN {
    fn from(data: &[Scalar]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<const N: usize> From<[Scalar; N]> for VecN {
    fn from(data: [Scalar; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[Scalar]> for VecN {
    #[inline]
    fn as_ref(&self) -> &[Scalar] {
        &self.data
    }
}

impl From<VecN> for Vec<Scalar> {
    fn from(v: VecN) -> Self {
        v.data
    }
}

impl FromIterator<Scalar> for VecN {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VecN {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Mul<Scalar> for VecN {
    type Output = VecN;
    #[inline]
    fn mul(self, rhs: Scalar) -> VecN {
        self.scale(rhs)
    }
}

impl Neg for VecN {
    type Output = VecN;
    #[inline]
    fn neg(self) -> VecN {
        self.map(|x| -x)
    }
}

impl fmt::Display for VecN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

/// A tiny wrapper for printing vector components rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a [Scalar], pub usize);

impl<'a> Rounded<'a> {
    /// Wrap any vector (`VecN`, `Vec2`, `Vec3`) for pretty-printing with
    /// `decimals` digits.
    #[inline]
    pub fn new<V: AsRef<[Scalar]> + ?Sized>(v: &'a V, decimals: usize) -> Self {
        Rounded(v.as_ref(), decimals)
    }
}

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "(")?;
        for (i, x) in v.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.dec$}", x = x, dec = dec)?;
        }
        write!(f, ")")
    }
}
