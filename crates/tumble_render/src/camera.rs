//! Perspective camera with screen-ray picking

use tumble_math::{mat4, Mat4, Ray3, Vec3};

/// A fixed look-at perspective camera
///
/// Both demos park the camera and never move it, so there is no
/// controller; the interesting parts are the matrices and the picking
/// ray used to grab the die.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up reference (world Y)
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Camera-space forward direction (unit length)
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalized()
    }

    /// View matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        look_at_matrix(self.position, self.target, self.up)
    }

    /// Projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_matrix(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }

    /// Ray from the eye through a screen pixel
    ///
    /// `(x, y)` are window coordinates with the origin at the top-left,
    /// the same space pointer events arrive in.
    pub fn screen_ray(&self, x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Ray3 {
        let aspect = viewport_width / viewport_height.max(1.0);
        let ndc_x = (x / viewport_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (y / viewport_height) * 2.0;

        let tan_half = (self.fov_y.to_radians() * 0.5).tan();

        let forward = self.forward();
        let right = forward.cross(self.up).normalized();
        let up = right.cross(forward);

        let direction = forward
            + right * (ndc_x * tan_half * aspect)
            + up * (ndc_y * tan_half);

        Ray3::new(self.position, direction)
    }
}

/// Create a perspective projection matrix (column-major)
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Create a look-at view matrix (column-major)
pub fn look_at_matrix(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_math::Vec4;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::default();
        let ray = camera.screen_ray(400.0, 300.0, 800.0, 600.0);
        let forward = camera.forward();
        assert!((ray.direction.x - forward.x).abs() < EPSILON);
        assert!((ray.direction.y - forward.y).abs() < EPSILON);
        assert!((ray.direction.z - forward.z).abs() < EPSILON);
    }

    #[test]
    fn test_ray_origin_is_eye() {
        let camera = Camera::default();
        let ray = camera.screen_ray(123.0, 456.0, 800.0, 600.0);
        assert_eq!(ray.origin, camera.position);
    }

    #[test]
    fn test_left_of_screen_bends_ray_left() {
        // Camera on +Z looking down -Z: screen-left is world -X
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            ..Camera::default()
        };
        let ray = camera.screen_ray(0.0, 300.0, 800.0, 600.0);
        assert!(ray.direction.x < 0.0);
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let eye = camera.position;
        let transformed = mat4::transform(view, Vec4::new(eye.x, eye.y, eye.z, 1.0));
        assert!(transformed.x.abs() < EPSILON);
        assert!(transformed.y.abs() < EPSILON);
        assert!(transformed.z.abs() < EPSILON);
    }

    #[test]
    fn test_projected_point_round_trips_through_screen_ray() {
        // Project a world point to the screen, shoot a picking ray through
        // that pixel, and check the ray passes close to the point.
        let camera = Camera::default();
        let (w, h) = (800.0f32, 600.0f32);
        let p = Vec3::new(0.0, 2.0, 0.0);

        let vp = camera.view_projection(w / h);
        let clip = mat4::transform(vp, Vec4::new(p.x, p.y, p.z, 1.0));
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let screen_x = (ndc_x + 1.0) * 0.5 * w;
        let screen_y = (1.0 - ndc_y) * 0.5 * h;

        let ray = camera.screen_ray(screen_x, screen_y, w, h);
        let t = (p - ray.origin).dot(ray.direction);
        let closest = ray.at(t);
        let distance = (closest - p).length();
        assert!(distance < 0.01, "ray misses the point by {}", distance);
    }
}
