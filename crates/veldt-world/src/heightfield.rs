//! Noise-based height and normal sampling.
//!
//! The height field is the pure function underneath all terrain: layered
//! simplex octaves summed per location, scaled by a biome factor derived
//! from a second, lower-frequency noise sample, then scaled by the global
//! maximum height. Normals are estimated by symmetric finite differences
//! over the same function.
//!
//! Sampling is deterministic for a fixed seed. Non-finite inputs propagate
//! NaN through the noise sources unguarded; callers pass finite positions.

use glam::Vec3;
use noise::{NoiseFn, Simplex};

use crate::config::GenConfig;

/// Pure height and normal sampler over world (x, z) positions.
pub struct HeightField {
    /// Primary terrain noise, shared by every octave.
    terrain_noise: Simplex,
    /// Low-frequency biome selection noise.
    biome_noise: Simplex,
    /// Generation parameters (octave table, biome bands, scales).
    config: GenConfig,
}

impl HeightField {
    /// Creates a height field from generation parameters.
    #[must_use]
    pub fn new(config: GenConfig) -> Self {
        Self {
            terrain_noise: Simplex::new(config.seed),
            biome_noise: Simplex::new(config.seed.wrapping_add(1)),
            config,
        }
    }

    /// Samples the biome noise at a pre-scaled position, normalized to 0..=1.
    fn biome_noise_at(&self, sx: f32, sz: f32) -> f32 {
        let w = f64::from(self.config.biome_wavelength);
        let raw = self
            .biome_noise
            .get([f64::from(sx) / w, f64::from(sz) / w]);
        (raw as f32 + 1.0) / 2.0
    }

    /// Returns the terrain height at a world (x, z) position.
    ///
    /// Octaves are summed at fixed wavelength/amplitude pairs, scaled by
    /// the biome band factor (bands bucket the biome noise value; the
    /// factor is further weighted by the raw biome value so band edges
    /// blend rather than step), then scaled by the maximum height.
    #[must_use]
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let sx = x / self.config.horizontal_scale;
        let sz = z / self.config.horizontal_scale;

        let biome = self.biome_noise_at(sx, sz);
        let bands = self.config.biome_scales.len();
        // Truncating bucket selection; biome == 1.0 clamps to the last band.
        let band = ((biome * bands as f32) as usize).min(bands.saturating_sub(1));
        let band_scale = self.config.biome_scales.get(band).copied().unwrap_or(1.0);
        let biome_factor = band_scale * biome;

        let mut height = 0.0_f32;
        for octave in &self.config.octaves {
            let w = f64::from(octave.wavelength);
            let sample = self
                .terrain_noise
                .get([f64::from(sx) / w, f64::from(sz) / w]);
            height += sample as f32 * octave.amplitude;
        }

        biome_factor * height * self.config.max_height
    }

    /// Returns the unit surface normal at a world (x, z) position.
    ///
    /// Estimated from the height at `x ± delta` and `z ± delta`:
    /// `(h(x-d,z) - h(x+d,z), 2d, h(x,z-d) - h(x,z+d))`, normalized.
    #[must_use]
    pub fn normal(&self, x: f32, z: f32) -> Vec3 {
        let d = self.config.normal_delta;
        let west = self.height(x - d, z);
        let east = self.height(x + d, z);
        let north = self.height(x, z - d);
        let south = self.height(x, z + d);

        Vec3::new(west - east, 2.0 * d, north - south).normalize()
    }

    /// Returns the generation parameters this field samples with.
    #[must_use]
    pub const fn config(&self) -> &GenConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Octave;

    fn single_octave_config() -> GenConfig {
        GenConfig {
            octaves: vec![Octave::new(50.0, 1.0)],
            max_height: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_height_deterministic() {
        let a = HeightField::new(GenConfig::default());
        let b = HeightField::new(GenConfig::default());
        for i in -8..8 {
            let x = i as f32 * 3.7;
            assert_eq!(a.height(x, -x), b.height(x, -x));
        }
    }

    #[test]
    fn test_different_seeds_different_heights() {
        let a = HeightField::new(GenConfig::default());
        let b = HeightField::new(GenConfig {
            seed: 999,
            ..Default::default()
        });
        let differs = (1..32).any(|i| {
            let x = i as f32 * 5.3;
            (a.height(x, x * 0.5) - b.height(x, x * 0.5)).abs() > f32::EPSILON
        });
        assert!(differs);
    }

    #[test]
    fn test_height_bounded_by_max_height() {
        let field = HeightField::new(single_octave_config());
        for i in -20..20 {
            for j in -20..20 {
                let h = field.height(i as f32 * 7.1, j as f32 * 7.1);
                assert!(h.is_finite());
                assert!((-10.0..=10.0).contains(&h), "height {h} out of range");
            }
        }
    }

    #[test]
    fn test_height_at_origin_in_range() {
        let field = HeightField::new(single_octave_config());
        let h = field.height(0.0, 0.0);
        assert!((-10.0..=10.0).contains(&h));
    }

    #[test]
    fn test_normal_is_unit_vector() {
        let field = HeightField::new(GenConfig::default());
        for i in 0..16 {
            let n = field.normal(i as f32 * 11.0, i as f32 * -4.0);
            assert!((n.length() - 1.0).abs() < 1e-4);
            // Terrain normals always point upward.
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn test_empty_biome_table_does_not_panic() {
        let field = HeightField::new(GenConfig {
            biome_scales: Vec::new(),
            ..Default::default()
        });
        let _ = field.height(1.0, 2.0);
    }
}
