//! Error types for Veldt operations.

use thiserror::Error;

/// Top-level error type for world operations.
#[derive(Debug, Error)]
pub enum WorldError {
    /// GPU-related errors reported by the mesh upload collaborator
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),

    /// Generation was started without an observation point attached
    #[error("no observation point attached")]
    NoObservationPoint,
}

/// Errors surfaced by the external GPU collaborator.
///
/// The terrain core never creates GPU resources itself; these reach it
/// only through the mesh upload trait boundary.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Buffer allocation failed
    #[error("buffer allocation failed: {0}")]
    BufferAlloc(String),

    /// Mesh upload failed
    #[error("mesh upload failed: {0}")]
    UploadFailed(String),
}

/// Result type alias for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
