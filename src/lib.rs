//! # vec_engine Quickstart
//!
//! ```rust
//! use vec_engine::prelude::*;
//!
//! // Generic vectors combine any number of operands of matching dimension.
//! let a = VecN::from([1.0, 2.0, 3.0]);
//! let b = VecN::from([2.0, 4.0, 6.0]);
//! assert!(a.collinear(&b).unwrap());
//! assert_eq!(a.add_all([&a, &b]).unwrap(), VecN::from([4.0, 8.0, 12.0]));
//!
//! // Cross and mixed product are native to Vec3.
//! let c = Vec3::new(2.0, 2.0, 5.0);
//! let x = Vec3::new(1.0, 2.0, 3.0);
//! let y = Vec3::new(1.0, 2.0, 4.0);
//! assert_eq!(x.cross_prod(&y), Vec3::new(2.0, -1.0, 0.0));
//! assert_eq!(c.mixed_prod(&x, &y), 2.0);
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod error;
mod fixed;
pub mod prelude;
pub mod vector;
pub mod vector2;

// N-dimensional vector support
pub mod nd;

// --- Public API exports ---

pub use error::{Result, VectorError};
pub use nd::types::Scalar;
pub use nd::vecn::{Rounded, VecN};
pub use vector::{Handedness, Vec3};
pub use vector2::Vec2;
