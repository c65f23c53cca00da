//! # Veldt Common
//!
//! Common types and shared abstractions for the Veldt terrain engine.
//!
//! This crate provides the foundational pieces used across the workspace:
//! - Chunk-grid coordinate types
//! - Common error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;
