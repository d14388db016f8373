//! Onix Core - Foundational types for the Onix map viewer
//!
//! This crate provides the core types that all other Onix crates depend on:
//! - `Vec3`, `Transform` - Spatial types (rotation in radians)
//! - `Color` - RGB color with components in [0, 1]
//! - `ContentHash` - SHA-256 based content fingerprints
//! - Error types and Result alias

mod error;
mod hash;
mod types;

pub use error::{OnixError, Result};
pub use hash::ContentHash;
pub use types::{Color, Transform, Vec3};
