// src/nd/types.rs
//! Component type used by every vector in the crate.

/// Scalar component type. `f64` unless the `f32` feature is enabled.
#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

// dimensions are runtime values on `VecN` and fixed by the wrapper type on `Vec2`/`Vec3`
