//! Cursor-to-world pointer target.

use glam::{Mat4, Vec2, Vec3};

/// World-space attraction target derived from the cursor.
///
/// The cursor's normalized device coordinates are unprojected through the
/// inverse view-projection into a ray, and the ray is intersected with the
/// z = 0 world plane. When the ray is parallel to the plane or points away
/// from it, the previous target is retained rather than left undefined.
#[derive(Debug, Clone)]
pub struct PointerTarget {
    target: Vec3,
}

impl PointerTarget {
    /// Starts at the origin until the first valid cursor projection.
    pub fn new() -> Self {
        Self { target: Vec3::ZERO }
    }

    /// Current target, always the last valid intersection.
    pub fn get(&self) -> Vec3 {
        self.target
    }

    /// Re-project from cursor NDC and the current view-projection matrix.
    ///
    /// Returns `false` when the ray misses the plane and the target was kept.
    pub fn update(&mut self, ndc: Vec2, view_proj: Mat4) -> bool {
        let inv = view_proj.inverse();
        // wgpu depth range: 0 at the near plane, 1 at the far plane.
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let dir = far - near;

        if dir.z.abs() < 1e-6 {
            return false;
        }
        let t = -near.z / dir.z;
        if t < 0.0 {
            return false;
        }
        self.target = near + dir * t;
        true
    }
}

impl Default for PointerTarget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    #[test]
    fn centered_cursor_with_default_camera_targets_origin() {
        let cam = Camera::new();
        let mut pointer = PointerTarget::new();
        assert!(pointer.update(Vec2::ZERO, cam.view_proj(1.5)));
        assert!(
            pointer.get().length() < 1e-3,
            "center ray through the orbit target must hit the origin, got {:?}",
            pointer.get()
        );
    }

    #[test]
    fn off_center_cursor_lands_on_the_plane() {
        let cam = Camera::new();
        let mut pointer = PointerTarget::new();
        assert!(pointer.update(Vec2::new(0.4, -0.3), cam.view_proj(16.0 / 9.0)));
        assert!(pointer.get().z.abs() < 1e-3, "target must lie on z = 0");
    }

    #[test]
    fn plane_parallel_ray_retains_previous_target() {
        let cam = Camera::new();
        let mut pointer = PointerTarget::new();
        pointer.update(Vec2::ZERO, cam.view_proj(1.0));
        let before = pointer.get();

        // View axis along +x at z = 1: every center ray stays parallel to the
        // z = 0 plane.
        let view = Mat4::look_at_rh(
            Vec3::new(-5.0, 0.0, 1.0),
            Vec3::new(5.0, 0.0, 1.0),
            Vec3::Y,
        );
        let proj = Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0);
        assert!(!pointer.update(Vec2::ZERO, proj * view));
        assert_eq!(pointer.get(), before);
    }
}
