use crate::constants::{CAMERA_DAMPING, CAMERA_RANGE, PITCH_GAIN, YAW_GAIN};
use crate::core::pointer::PointerState;
use glam::Vec3;

/// Damping, clamp and pointer gains for the scene parallax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationParams {
    pub damping: f32,
    pub range: f32,
    pub yaw_gain: f32,
    pub pitch_gain: f32,
}

impl Default for OrientationParams {
    fn default() -> Self {
        Self {
            damping: CAMERA_DAMPING,
            range: CAMERA_RANGE,
            yaw_gain: YAW_GAIN,
            pitch_gain: PITCH_GAIN,
        }
    }
}

/// Whole-scene rotation (radians). The camera never turns; the scene does.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SceneOrientation {
    pub x: f32,
    pub y: f32,
}

impl SceneOrientation {
    /// Advance one frame toward the pointer-derived target, then clamp both
    /// angles to `[-range, range]`.
    pub fn update(&mut self, pointer: PointerState, camera_rotation: Vec3, p: &OrientationParams) {
        self.y -= (pointer.x * p.yaw_gain - camera_rotation.y) * p.damping;
        self.x -= (-(pointer.y * p.pitch_gain) - camera_rotation.x) * p.damping;
        self.x = self.x.clamp(-p.range, p.range);
        self.y = self.y.clamp(-p.range, p.range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_moves_against_pointer_direction() {
        let mut o = SceneOrientation::default();
        let p = OrientationParams::default();
        o.update(PointerState { x: 0.5, y: 0.5 }, Vec3::ZERO, &p);
        assert!(o.y < 0.0);
        assert!(o.x > 0.0);
    }

    #[test]
    fn camera_rotation_offsets_target() {
        let mut o = SceneOrientation::default();
        let p = OrientationParams::default();
        o.update(PointerState::default(), Vec3::new(0.0, 0.1, 0.0), &p);
        assert!((o.y - 0.1 * p.damping).abs() < 1e-9);
    }
}
