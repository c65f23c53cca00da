//! Generation configuration.
//!
//! All tunables of the terrain core live here so they can be loaded from a
//! config file or constructed in code. Defaults match the reference
//! constants the engine shipped with.

use serde::{Deserialize, Serialize};

/// Default chunk edge length in cells.
pub const DEFAULT_CHUNK_SIZE: u32 = 16;

/// Default generation radius around the observation point, in chunks.
pub const DEFAULT_GENERATION_RADIUS: i32 = 10;

/// Default hard ceiling on total generated chunks.
pub const DEFAULT_CHUNK_CEILING: usize = 1000;

/// Default ceiling on updatable world objects before generation is refused.
pub const DEFAULT_WORLD_OBJECT_CEILING: usize = 100;

/// A single noise octave: wavelength (divisor) and amplitude (weight).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Octave {
    /// Wavelength of the octave; sample coordinates are divided by this.
    pub wavelength: f32,
    /// Amplitude the octave contributes to the sum.
    pub amplitude: f32,
}

impl Octave {
    /// Creates a new octave.
    #[must_use]
    pub const fn new(wavelength: f32, amplitude: f32) -> Self {
        Self {
            wavelength,
            amplitude,
        }
    }
}

/// Parameters controlling terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// World seed for deterministic generation.
    pub seed: u32,
    /// Chunk edge length in cells.
    pub chunk_size: u32,
    /// Radius of the generation ring around the observation point, in chunks.
    pub generation_radius: i32,
    /// Hard ceiling on total generated chunks; the worker stops for good
    /// once it has produced this many.
    pub chunk_ceiling: usize,
    /// World-object count above which generation refuses to start.
    pub world_object_ceiling: usize,
    /// Octave table summed by the height field.
    pub octaves: Vec<Octave>,
    /// Per-band height scaling factors; the band is selected by bucketing
    /// the biome noise value into `biome_scales.len()` bands.
    pub biome_scales: Vec<f32>,
    /// Wavelength of the biome selection noise.
    pub biome_wavelength: f32,
    /// Global maximum terrain height multiplier.
    pub max_height: f32,
    /// Horizontal scale; world coordinates are divided by this before
    /// noise sampling.
    pub horizontal_scale: f32,
    /// Finite-difference delta used for normal estimation, in world units.
    pub normal_delta: f32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            generation_radius: DEFAULT_GENERATION_RADIUS,
            chunk_ceiling: DEFAULT_CHUNK_CEILING,
            world_object_ceiling: DEFAULT_WORLD_OBJECT_CEILING,
            octaves: vec![
                Octave::new(50.0, 1.0),
                Octave::new(25.0, 0.5),
                Octave::new(12.5, 0.25),
            ],
            biome_scales: vec![0.2, 0.5, 0.8, 1.0],
            biome_wavelength: 100.0,
            max_height: 10.0,
            horizontal_scale: 10.0,
            normal_delta: 0.5,
        }
    }
}

impl GenConfig {
    /// Number of vertices along one edge of a chunk mesh (one overlap
    /// row/column beyond the cell grid).
    #[must_use]
    pub const fn mesh_width(&self) -> u32 {
        self.chunk_size + 1
    }

    /// Number of height samples retained per chunk.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.chunk_size * self.chunk_size) as usize
    }

    /// Number of triangle-list indices per chunk mesh.
    #[must_use]
    pub const fn index_count(&self) -> usize {
        self.cell_count() * 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenConfig::default();
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.generation_radius, 10);
        assert_eq!(config.chunk_ceiling, 1000);
        assert_eq!(config.world_object_ceiling, 100);
        assert_eq!(config.biome_scales.len(), 4);
    }

    #[test]
    fn test_derived_counts() {
        let config = GenConfig {
            chunk_size: 16,
            ..Default::default()
        };
        assert_eq!(config.mesh_width(), 17);
        assert_eq!(config.cell_count(), 256);
        assert_eq!(config.index_count(), 1536);
    }
}
