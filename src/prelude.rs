// src/prelude.rs
//! The “everything” import for vec_engine.
//!
//! ```rust
//! use vec_engine::prelude::*;
//! ```

// core data types
pub use crate::nd::types::Scalar;
pub use crate::nd::vecn::{Rounded, VecN};
pub use crate::vector::{Handedness, Vec3};
pub use crate::vector2::Vec2;

// errors
pub use crate::error::{Result, VectorError};
