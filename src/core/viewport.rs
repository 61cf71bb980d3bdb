use crate::constants::{CAMERA_ASPECT, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION};
use glam::{Mat4, Vec3};

/// Perspective camera. Only `aspect` changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Euler XYZ; read by the orientation controller, never animated.
    pub rotation: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: CAMERA_ASPECT,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::from_array(CAMERA_POSITION),
            rotation: Vec3::ZERO,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// World -> view; the inverse of the camera's own placement.
    pub fn view_matrix(&self) -> Mat4 {
        let world = Mat4::from_rotation_translation(
            crate::core::scene::euler_xyz(self.rotation),
            self.position,
        );
        world.inverse()
    }

    /// Recompute aspect from a display size. Returns false for a degenerate size.
    pub fn set_aspect_from(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }
}

/// A drawable surface with a CSS display size and a backing pixel buffer.
pub trait DisplaySurface {
    /// Size the surface is laid out at (CSS pixels). This is the authority.
    fn display_size(&self) -> (u32, u32);
    /// Current backing-buffer size in pixels.
    fn buffer_size(&self) -> (u32, u32);
    fn set_buffer_size(&mut self, width: u32, height: u32);
}

/// Make the backing buffer match the display size.
///
/// Returns true when a resize happened; the caller owns any camera update.
pub fn sync_size<S: DisplaySurface + ?Sized>(surface: &mut S) -> bool {
    let (w, h) = surface.display_size();
    if surface.buffer_size() == (w, h) {
        return false;
    }
    surface.set_buffer_size(w, h);
    true
}
