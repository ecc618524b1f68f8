/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Size of the drawing surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A projected point: pixel coordinates plus NDC depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Perspective camera looking at a target
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at the origin looking down -Z, `fov_degrees` measured vertically
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Point3::origin(),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Move the camera along Z, keeping it pointed at the origin
    pub fn at_distance(mut self, z: f32) -> Self {
        self.position = Point3::new(0.0, 0.0, z);
        self.target = Point3::origin();
        self
    }

    /// Match the aspect ratio to a new surface size.
    ///
    /// A zero-height surface (collapsed container) keeps the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a model-space point to screen space.
    ///
    /// Points in front of the camera are returned even when they fall outside
    /// the viewport, so that lines crossing the border can still be drawn and
    /// clipped by the surface. `None` means the point is behind the near plane.
    pub fn project(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        viewport: Viewport,
    ) -> Option<ScreenPoint> {
        let eye = (self.view_matrix() * model_matrix).transform_point(point);
        if eye.z > -self.near {
            return None;
        }

        // transform_point performs the perspective divide
        let ndc = self.projection_matrix().transform_point(&eye);

        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * viewport.width,
            y: (1.0 - ndc.y) * 0.5 * viewport.height,
            depth: ndc.z,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(75.0, 800.0 / 600.0, 0.1, 1000.0)
    }
}
