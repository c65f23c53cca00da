//! The tracked position generation is centered on.

use glam::Vec3;
use parking_lot::RwLock;

/// An externally owned position the generation worker polls each cycle.
///
/// Typically wraps a camera or player transform: the main thread writes
/// through [`ObservationPoint::set_position`], the worker snapshots through
/// [`ObservationPoint::position`]. The lock is held only for the copy, so
/// neither side can stall the other for long.
#[derive(Debug)]
pub struct ObservationPoint {
    position: RwLock<Vec3>,
}

impl ObservationPoint {
    /// Creates an observation point at the given position.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            position: RwLock::new(position),
        }
    }

    /// Creates an observation point at the world origin.
    #[must_use]
    pub const fn at_origin() -> Self {
        Self::new(Vec3::ZERO)
    }

    /// Moves the observation point.
    pub fn set_position(&self, position: Vec3) {
        *self.position.write() = position;
    }

    /// Returns a snapshot of the current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        *self.position.read()
    }
}

impl Default for ObservationPoint {
    fn default() -> Self {
        Self::at_origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_tracks_writes() {
        let point = ObservationPoint::at_origin();
        assert_eq!(point.position(), Vec3::ZERO);
        point.set_position(Vec3::new(100.0, 5.0, -40.0));
        assert_eq!(point.position(), Vec3::new(100.0, 5.0, -40.0));
    }
}
