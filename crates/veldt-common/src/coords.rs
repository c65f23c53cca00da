//! Coordinate types for the chunk grid.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Identifies a terrain chunk by the world-space position of its corner.
///
/// Both components are always multiples of the chunk edge length, so a
/// coordinate names exactly one tile of the chunk grid. Use [`ChunkCoord::align`]
/// to snap an arbitrary world position onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ChunkCoord {
    /// World-space X of the chunk corner
    pub x: i32,
    /// World-space Z of the chunk corner
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    ///
    /// The caller is responsible for passing grid-aligned values; prefer
    /// [`ChunkCoord::align`] when starting from an arbitrary position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Snaps a world position onto the chunk grid, flooring toward the
    /// grid cell that contains it (also for negative positions).
    #[must_use]
    pub const fn align(x: i32, z: i32, chunk_size: u32) -> Self {
        let size = chunk_size as i32;
        Self {
            x: x.div_euclid(size) * size,
            z: z.div_euclid(size) * size,
        }
    }

    /// Returns the coordinate `dx`/`dz` whole chunks away from this one.
    #[must_use]
    pub const fn offset(self, dx: i32, dz: i32, chunk_size: u32) -> Self {
        let size = chunk_size as i32;
        Self {
            x: self.x + dx * size,
            z: self.z + dz * size,
        }
    }
}

/// Converts a local (row, column) pair to a row-major linear index.
#[must_use]
pub const fn to_index(row: u32, col: u32, stride: u32) -> usize {
    (row as usize) * (stride as usize) + (col as usize)
}
