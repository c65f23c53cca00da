//! # Veldt World
//!
//! The terrain core of the Veldt engine: an effectively unbounded
//! procedural landscape streamed around a moving observation point.
//!
//! This crate handles:
//! - Noise-based height and normal sampling ([`heightfield`])
//! - Chunk mesh synthesis ([`builder`])
//! - The worker-to-world hand-off queue ([`handoff`])
//! - Background generation around the observation point ([`worker`])
//! - The authoritative world: registry, lifecycle, per-frame passes
//!   ([`world`])
//!
//! GPU upload and drawing stay behind the trait boundary in [`render`];
//! the crate compiles without any graphics dependency.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod builder;
pub mod config;
pub mod handoff;
pub mod heightfield;
pub mod mesh;
pub mod observation;
pub mod render;
pub mod worker;
pub mod world;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::builder::*;
    pub use crate::config::*;
    pub use crate::handoff::*;
    pub use crate::heightfield::*;
    pub use crate::mesh::*;
    pub use crate::observation::*;
    pub use crate::render::*;
    pub use crate::worker::*;
    pub use crate::world::*;
}

pub use prelude::*;
