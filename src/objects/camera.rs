use crate::objects::Point;
use nalgebra::{Matrix4, Point3, Vector3};

/// Smallest near/far separation. The UI sliders can drive both planes to the
/// same value, and the projection is undefined without a gap.
const MIN_PLANE_GAP: f32 = 0.1;

/// Perspective camera looking at the origin with a fixed up vector.
///
/// Every scalar here is live-editable from the UI, so the matrices are
/// derived from the current values on each frame instead of being cached.
pub struct Camera {
    pub eye: Point,
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Camera {
    pub fn new(eye: Point, fov_degrees: f32, aspect_ratio: f32, near_plane: f32, far_plane: f32) -> Self {
        Camera {
            eye,
            fov_degrees,
            aspect_ratio,
            near_plane,
            far_plane,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye, &Point3::origin(), &Vector3::y())
    }

    pub fn perspective_matrix(&self) -> Matrix4<f32> {
        let far_plane = self.far_plane.max(self.near_plane + MIN_PLANE_GAP);
        Matrix4::new_perspective(
            self.aspect_ratio,
            self.fov_degrees.to_radians(),
            self.near_plane,
            far_plane,
        )
    }

    /// Combined view-projection matrix.
    pub fn camera_matrix(&self) -> Matrix4<f32> {
        self.perspective_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Point::new(0.0, 3.0, 6.5), 45.0, 1.0, 1.0, 15.0)
    }

    #[test]
    fn view_matrix_sends_the_eye_to_the_view_origin() {
        let camera = camera();
        let eye_in_view = camera.view_matrix().transform_point(&camera.eye);
        assert!(eye_in_view.coords.norm() < 1e-5);
    }

    #[test]
    fn look_target_lands_on_the_negative_view_axis() {
        let camera = camera();
        let target = camera.view_matrix().transform_point(&Point3::origin());
        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!((target.z + camera.eye.coords.norm()).abs() < 1e-4);
    }

    #[test]
    fn matrices_follow_scalar_edits() {
        let mut camera = camera();
        let before = camera.camera_matrix();
        camera.fov_degrees = 30.0;
        assert_ne!(before, camera.camera_matrix());
    }

    #[test]
    fn superimposed_planes_still_project() {
        let mut camera = camera();
        camera.near_plane = 5.0;
        camera.far_plane = 5.0;
        assert!(camera.perspective_matrix().iter().all(|v| v.is_finite()));

        // An inverted pair is clamped the same way.
        camera.far_plane = 1.0;
        assert!(camera.camera_matrix().iter().all(|v| v.is_finite()));
    }
}
