/// Hero scene: one spinning wireframe sphere and the camera looking at it
use nalgebra::Vector3;

use crate::config::{HeroConfig, SpinRate};
use crate::geometry::{Edge, Mesh};
use crate::projection::{Camera, ScreenPoint, Viewport};
use crate::transform::{RotationState, Transform};

pub struct HeroScene {
    edges: Vec<Edge>,
    position: Vector3<f32>,
    rotation: RotationState,
    spin: SpinRate,
    camera: Camera,
    viewport: Viewport,
}

impl HeroScene {
    pub fn new(config: &HeroConfig, width: f32, height: f32) -> Self {
        let mesh = Mesh::icosphere(config.radius, config.detail);
        let mut camera = Camera::perspective(config.fov_degrees, 1.0, config.near, config.far)
            .at_distance(config.camera_z);
        camera.set_viewport(width, height);

        Self {
            edges: mesh.edges(),
            position: Vector3::new(config.offset_x, 0.0, 0.0),
            rotation: RotationState::zero(),
            spin: config.spin,
            camera,
            viewport: Viewport::new(width, height),
        }
    }

    /// Advance the spin by one frame
    pub fn tick(&mut self) {
        self.rotation.rotate(self.spin.dx, self.spin.dy, 0.0);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
        self.viewport = Viewport::new(width, height);
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Screen-space segments for the current frame.
    ///
    /// Edges with an endpoint behind the camera are skipped.
    pub fn segments(&self) -> Vec<(ScreenPoint, ScreenPoint)> {
        let model = Transform::model_matrix(&self.position, &self.rotation);
        self.edges
            .iter()
            .filter_map(|edge| {
                let a = self.camera.project(&edge.start, &model, self.viewport)?;
                let b = self.camera.project(&edge.end, &model, self.viewport)?;
                Some((a, b))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_applies_spin_rate() {
        let mut scene = HeroScene::new(&HeroConfig::default(), 800.0, 400.0);
        scene.tick();
        scene.tick();
        let rotation = scene.rotation();
        assert!((rotation.x - 0.004).abs() < 1e-6);
        assert!((rotation.y - 0.008).abs() < 1e-6);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_resize_updates_camera_and_viewport() {
        let mut scene = HeroScene::new(&HeroConfig::default(), 800.0, 400.0);
        assert!((scene.camera().aspect - 2.0).abs() < 1e-6);

        scene.resize(300.0, 600.0);
        assert!((scene.camera().aspect - 0.5).abs() < 1e-6);
        assert_eq!(scene.viewport(), Viewport::new(300.0, 600.0));
    }

    #[test]
    fn test_sphere_sits_left_of_centre() {
        let scene = HeroScene::new(&HeroConfig::default(), 800.0, 400.0);
        let segments = scene.segments();
        assert_eq!(segments.len(), scene.edge_count());

        let mean_x = segments.iter().map(|(a, b)| a.x + b.x).sum::<f32>()
            / (2 * segments.len()) as f32;
        assert!(mean_x < 400.0, "mean x {}", mean_x);
    }
}
