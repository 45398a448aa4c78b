//! # Fogvale Common
//!
//! Common types and utilities shared across all Fogvale subsystems:
//! - Math primitives (axis-aligned boxes, spheres, interpolation helpers)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod math;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::math::*;
}

pub use prelude::*;
