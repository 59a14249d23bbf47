use bevy_math::Vec3;

/// Result of a downward ground probe.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    /// Unit surface normal at the contact point.
    pub normal: Vec3,
    /// Distance from the probe origin to the surface (m).
    pub distance: f32,
}

/// Downward probe the host environment answers once per fixed tick. A
/// pure query with no side effects: `None` means nothing within reach,
/// and the caller keeps its last known normal rather than resetting it.
pub trait GroundSensor {
    fn probe(&self, position: Vec3, down: Vec3, max_distance: f32) -> Option<GroundHit>;
}

/// Infinite horizontal plane at a fixed height. Enough for the harness
/// and the behavioral tests.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub height: f32,
}

impl GroundSensor for FlatGround {
    fn probe(&self, position: Vec3, down: Vec3, max_distance: f32) -> Option<GroundHit> {
        // A probe pointing away from the plane can't hit it.
        if down.y >= 0.0 {
            return None;
        }
        let gap = position.y - self.height;
        if gap > max_distance {
            return None;
        }
        Some(GroundHit {
            normal: Vec3::Y,
            distance: gap.max(0.0),
        })
    }
}
