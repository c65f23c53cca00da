//! Chunk building: height grid synthesis and mesh triangulation.

use veldt_common::coords::to_index;
use veldt_common::ChunkCoord;

use crate::config::GenConfig;
use crate::heightfield::HeightField;
use crate::mesh::{BuiltChunk, HeightGrid, MeshPayload, Vertex};

/// Builds complete chunks from chunk coordinates.
///
/// Each build samples a `(size+1) × (size+1)` grid covering the chunk plus
/// one overlap row/column, so adjacent chunks share edge vertices and
/// normals line up seamlessly across chunk borders. Builds are total: a
/// call either returns a complete result or is never made, there is no
/// mid-build cancellation.
pub struct ChunkBuilder {
    field: HeightField,
}

impl ChunkBuilder {
    /// Creates a builder sampling the given height field.
    #[must_use]
    pub fn new(field: HeightField) -> Self {
        Self { field }
    }

    /// Creates a builder from generation parameters.
    #[must_use]
    pub fn from_config(config: GenConfig) -> Self {
        Self::new(HeightField::new(config))
    }

    /// Builds the height grid and mesh for the chunk at `coord`.
    ///
    /// Deterministic: repeat builds of the same coordinate produce
    /// bit-identical results.
    #[must_use]
    pub fn build(&self, coord: ChunkCoord) -> BuiltChunk {
        let size = self.field.config().chunk_size;
        let mesh_width = size + 1;

        let mut vertices = Vec::with_capacity((mesh_width * mesh_width) as usize);
        let mut indices = Vec::with_capacity((size * size * 6) as usize);
        let mut heights = vec![0.0_f32; (size * size) as usize];

        for i in 0..=size {
            for j in 0..=size {
                // Sample positions sit half a cell inside the grid point.
                let cx = (coord.x + i as i32) as f32 - 0.5;
                let cz = (coord.z + j as i32) as f32 - 0.5;
                let cy = self.field.height(cx, cz);
                let normal = self.field.normal(cx, cz);

                vertices.push(Vertex::new([cx, cy, cz], normal.to_array()));

                // The overlap row/column carries vertices only, no cells.
                if i < size && j < size {
                    heights[to_index(i, j, size)] = cy;

                    let top_left = i * mesh_width + j;
                    let bottom_left = (i + 1) * mesh_width + j;
                    let top_right = i * mesh_width + (j + 1);
                    let bottom_right = (i + 1) * mesh_width + (j + 1);

                    indices.extend_from_slice(&[
                        top_left,
                        top_right,
                        bottom_left,
                        top_right,
                        bottom_right,
                        bottom_left,
                    ]);
                }
            }
        }

        BuiltChunk {
            coord,
            heights: HeightGrid::new(size, heights),
            payload: MeshPayload { vertices, indices },
        }
    }

    /// Returns the height field this builder samples.
    #[must_use]
    pub const fn field(&self) -> &HeightField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ChunkBuilder {
        ChunkBuilder::from_config(GenConfig::default())
    }

    #[test]
    fn test_build_counts() {
        let built = builder().build(ChunkCoord::new(0, 0));
        assert_eq!(built.payload.vertex_count(), 17 * 17);
        assert_eq!(built.payload.index_count(), 16 * 16 * 6);
        assert_eq!(built.heights.samples().len(), 16 * 16);
    }

    #[test]
    fn test_indices_in_bounds() {
        let built = builder().build(ChunkCoord::new(-32, 48));
        let vertex_count = built.payload.vertex_count() as u32;
        assert!(built.payload.indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_build_deterministic() {
        let b = builder();
        let coord = ChunkCoord::new(16, -16);
        let first = b.build(coord);
        let second = b.build(coord);
        assert_eq!(first.payload, second.payload);
        assert_eq!(first.heights, second.heights);
    }

    #[test]
    fn test_first_cell_winding() {
        let built = builder().build(ChunkCoord::new(0, 0));
        // Cell (0, 0): top-left/top-right/bottom-left, then
        // top-right/bottom-right/bottom-left, with row stride 17.
        assert_eq!(&built.payload.indices[..6], &[0, 1, 17, 1, 18, 17]);
    }

    #[test]
    fn test_height_grid_matches_vertices() {
        let built = builder().build(ChunkCoord::new(64, 64));
        for i in 0..16 {
            for j in 0..16 {
                let vertex_y = built.payload.vertices[(i * 17 + j) as usize].position[1];
                assert_eq!(built.heights.get(i, j), Some(vertex_y));
            }
        }
    }

    #[test]
    fn test_adjacent_chunks_share_edge_heights() {
        let b = builder();
        let left = b.build(ChunkCoord::new(0, 0));
        let right = b.build(ChunkCoord::new(16, 0));
        // Left chunk's overlap row (i == 16) equals the right chunk's first row.
        for j in 0..=16_u32 {
            let shared = left.payload.vertices[(16 * 17 + j) as usize];
            let owned = right.payload.vertices[j as usize];
            assert_eq!(shared.position, owned.position);
            assert_eq!(shared.normal, owned.normal);
        }
    }
}
