// src/fixed.rs
//! Shared surface of the fixed-size vectors (`Vec2`, `Vec3`).
//!
//! Components live inline in a `[Scalar; N]`, so the types are `Copy` and
//! never allocate. The generic view is `to_vecn()` / `From<_> for VecN`; the
//! raw components are reachable through `Deref<Target = [Scalar]>`.

macro_rules! impl_fixed_vector {
    ($t:ident, $n:expr) => {
        impl $t {
            /// Build from a slice holding exactly the right number of components.
            pub fn from_slice(s: &[$crate::nd::types::Scalar]) -> $crate::error::Result<Self> {
                let data: [$crate::nd::types::Scalar; $n] = s.try_into().map_err(|_| {
                    let kind = stringify!($t);
                    tracing::debug!(kind, expected = $n, actual = s.len(), "rejected fixed-size components");
                    $crate::error::VectorError::InvalidDimension { expected: $n, actual: s.len() }
                })?;
                Ok(Self { data })
            }

            #[inline]
            pub fn zero() -> Self {
                Self { data: [0.0; $n] }
            }

            /// Number of components (always the same for this type).
            #[inline]
            pub fn dims(&self) -> usize {
                $n
            }

            /// Component `i`.
            pub fn get(&self, i: usize) -> $crate::error::Result<$crate::nd::types::Scalar> {
                self.data.get(i).copied().ok_or_else(|| {
                    tracing::debug!(index = i, dims = $n, "component index out of bounds");
                    $crate::error::VectorError::IndexOutOfBounds { index: i, dims: $n }
                })
            }

            #[inline]
            pub fn as_array(&self) -> [$crate::nd::types::Scalar; $n] {
                self.data
            }

            #[inline]
            pub fn to_vec(&self) -> Vec<$crate::nd::types::Scalar> {
                self.data.to_vec()
            }

            /// Copy into the generic, runtime-dimension vector.
            #[inline]
            pub fn to_vecn(&self) -> $crate::nd::vecn::VecN {
                $crate::nd::vecn::VecN::from(self.data)
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                $crate::nd::relation::is_zero(&self.data)
            }

            #[inline]
            pub fn dot(&self, other: &Self) -> $crate::nd::types::Scalar {
                self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum()
            }

            #[inline]
            pub fn norm(&self) -> $crate::nd::types::Scalar {
                self.dot(self).sqrt()
            }

            /// Exact componentwise equality.
            #[inline]
            pub fn equal(&self, other: &Self) -> bool {
                self == other
            }

            /// `true` if the dot product is exactly zero.
            #[inline]
            pub fn perpendicular(&self, other: &Self) -> bool {
                self.dot(other) == 0.0
            }

            #[inline]
            pub fn scale(&self, s: $crate::nd::types::Scalar) -> Self {
                *self * s
            }

            /// Divide every component by `s`. Dividing by zero follows IEEE-754.
            #[inline]
            pub fn div(&self, s: $crate::nd::types::Scalar) -> Self {
                *self / s
            }

            /// `self + Σ addends`.
            pub fn add_all<'a, I>(&self, addends: I) -> Self
            where
                I: IntoIterator<Item = &'a Self>,
            {
                addends.into_iter().fold(*self, |acc, v| acc + *v)
            }

            /// Subtract each of `subtrahends` from `self`, left to right.
            pub fn sub_all<'a, I>(&self, subtrahends: I) -> Self
            where
                I: IntoIterator<Item = &'a Self>,
            {
                subtrahends.into_iter().fold(*self, |acc, v| acc - *v)
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl std::ops::Deref for $t {
            type Target = [$crate::nd::types::Scalar];
            #[inline]
            fn deref(&self) -> &[$crate::nd::types::Scalar] {
                &self.data
            }
        }

        impl AsRef<[$crate::nd::types::Scalar]> for $t {
            #[inline]
            fn as_ref(&self) -> &[$crate::nd::types::Scalar] {
                &self.data
            }
        }

        impl TryFrom<$crate::nd::vecn::VecN> for $t {
            type Error = $crate::error::VectorError;
            fn try_from(v: $crate::nd::vecn::VecN) -> $crate::error::Result<Self> {
                Self::from_slice(v.as_slice())
            }
        }

        impl TryFrom<Vec<$crate::nd::types::Scalar>> for $t {
            type Error = $crate::error::VectorError;
            fn try_from(v: Vec<$crate::nd::types::Scalar>) -> $crate::error::Result<Self> {
                Self::from_slice(&v)
            }
        }

        impl From<[$crate::nd::types::Scalar; $n]> for $t {
            #[inline]
            fn from(data: [$crate::nd::types::Scalar; $n]) -> Self {
                Self { data }
            }
        }

        impl From<$t> for [$crate::nd::types::Scalar; $n] {
            #[inline]
            fn from(v: $t) -> Self {
                v.data
            }
        }

        impl From<$t> for $crate::nd::vecn::VecN {
            #[inline]
            fn from(v: $t) -> Self {
                v.to_vecn()
            }
        }

        impl std::ops::Add for $t {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { data: std::array::from_fn(|i| self.data[i] + rhs.data[i]) }
            }
        }

        impl std::ops::Sub for $t {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { data: std::array::from_fn(|i| self.data[i] - rhs.data[i]) }
            }
        }

        impl std::ops::Mul<$crate::nd::types::Scalar> for $t {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $crate::nd::types::Scalar) -> Self {
                Self { data: self.data.map(|x| x * rhs) }
            }
        }

        // Scalar * vector (commutative)
        impl std::ops::Mul<$t> for $crate::nd::types::Scalar {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl std::ops::Div<$crate::nd::types::Scalar> for $t {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $crate::nd::types::Scalar) -> Self {
                Self { data: self.data.map(|x| x / rhs) }
            }
        }

        impl std::ops::Neg for $t {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { data: self.data.map(|x| -x) }
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.to_vecn(), f)
            }
        }
    };
}

pub(crate) use impl_fixed_vector;
