//! Capability traits at the rendering boundary.
//!
//! The terrain core never talks to a GPU directly. Everything it needs
//! from the render side is expressed here: a way to turn a CPU mesh
//! payload into an opaque drawable handle, and the two capabilities a
//! world object may offer. A world object implements either trait, both,
//! or neither; there is no base-class hierarchy to inherit from.

use veldt_common::GpuError;

use crate::mesh::MeshPayload;

/// An object the world draws once per tick.
pub trait Drawable {
    /// Draws the object. `delta_time` is the seconds elapsed since the
    /// previous tick.
    fn draw(&mut self, delta_time: f32);
}

/// An object the world updates once per tick.
pub trait Updatable {
    /// Advances the object by `delta_time` seconds.
    fn update(&mut self, delta_time: f32);
}

/// The external mesh upload collaborator.
///
/// Accepts vertex and index data and produces a drawable GPU-resident
/// mesh handle. Implementations are synchronous and must only be called
/// from the main thread; the world copies nothing back out of the handle.
pub trait MeshUpload {
    /// Opaque drawable mesh handle owned by the chunk after upload.
    type Handle: Drawable;

    /// Uploads the payload and returns the resulting handle.
    ///
    /// The payload's CPU-side buffers remain owned by the caller and are
    /// dropped immediately after a successful upload.
    fn upload(&mut self, payload: &MeshPayload) -> Result<Self::Handle, GpuError>;
}
