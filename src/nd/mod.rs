//! N-dimensional vector support (VecN, component type, relation tests).

pub mod relation;
pub mod types;
pub mod vecn;
