//! Mesh and chunk data structures.
//!
//! `MeshPayload` is the transient CPU-side bundle a build produces; it is
//! moved (never copied, never shared) from the generation worker through
//! the hand-off queue to the world, which trades it for a GPU mesh handle
//! and drops the CPU buffers. `Chunk` is the durable entity that survives
//! in the registry afterwards.

use bytemuck::{Pod, Zeroable};
use veldt_common::coords::to_index;
use veldt_common::ChunkCoord;

/// A single terrain vertex as uploaded to the GPU.
///
/// The UV slot is reserved for texturing and currently always zero.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Unit surface normal
    pub normal: [f32; 3],
    /// Texture coordinates (reserved, unused)
    pub uv: [f32; 2],
}

impl Vertex {
    /// Creates a vertex with a zeroed UV placeholder.
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            uv: [0.0, 0.0],
        }
    }
}

/// CPU-side mesh data ready for upload: a vertex sequence and a
/// triangle-list index sequence into it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPayload {
    /// Vertex sequence, row-major over the sample grid
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices, two triangles per cell
    pub indices: Vec<u32>,
}

impl MeshPayload {
    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Per-cell height samples of one chunk, row-major, `size × size` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    size: u32,
    samples: Vec<f32>,
}

impl HeightGrid {
    /// Wraps a row-major sample vector of length `size × size`.
    ///
    /// # Panics
    /// Panics if the sample count does not match the grid size.
    #[must_use]
    pub fn new(size: u32, samples: Vec<f32>) -> Self {
        assert_eq!(
            samples.len(),
            (size * size) as usize,
            "height grid sample count must be size^2"
        );
        Self { size, samples }
    }

    /// Returns the grid edge length.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Returns the height sample at a local (row, col), if in bounds.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.samples.get(to_index(row, col, self.size)).copied()
    }

    /// Returns all samples, row-major.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// A completed build result, tagged with its coordinate, as it travels
/// from the generation worker to the world.
#[derive(Debug)]
pub struct BuiltChunk {
    /// Chunk grid coordinate this build belongs to
    pub coord: ChunkCoord,
    /// Core height samples retained for later sampling
    pub heights: HeightGrid,
    /// Mesh data pending GPU upload
    pub payload: MeshPayload,
}

/// A durable world chunk: coordinate, height samples, and the opaque GPU
/// mesh handle produced by the upload collaborator.
#[derive(Debug)]
pub struct Chunk<H> {
    coord: ChunkCoord,
    heights: HeightGrid,
    mesh: H,
}

impl<H> Chunk<H> {
    /// Creates a chunk from an uploaded build.
    #[must_use]
    pub fn new(coord: ChunkCoord, heights: HeightGrid, mesh: H) -> Self {
        Self {
            coord,
            heights,
            mesh,
        }
    }

    /// Returns the chunk coordinate.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns the retained height samples.
    #[must_use]
    pub const fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    /// Returns the GPU mesh handle.
    #[must_use]
    pub const fn mesh(&self) -> &H {
        &self.mesh
    }

    /// Returns the GPU mesh handle mutably (drawing may mutate it).
    pub fn mesh_mut(&mut self) -> &mut H {
        &mut self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        // position + normal + uv, four bytes each
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_height_grid_access() {
        let grid = HeightGrid::new(2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(grid.get(0, 1), Some(2.0));
        assert_eq!(grid.get(1, 0), Some(3.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "height grid sample count must be size^2")]
    fn test_height_grid_rejects_wrong_length() {
        let _ = HeightGrid::new(2, vec![0.0; 3]);
    }
}
