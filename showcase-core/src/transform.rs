/// Rotation state and model transforms
use nalgebra::{Matrix4, Vector3};

/// Rotation state around three axes (in radians)
///
/// Angles only ever grow; they are not wrapped, the trigonometry in
/// [`Transform::rotation_matrix`] takes care of that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Euler rotation applied X first, then Y, then Z in the object's frame
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        rx * ry * rz
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Object-to-world matrix: spin in place, then move to `position`
    pub fn model_matrix(position: &Vector3<f32>, rotation: &RotationState) -> Matrix4<f32> {
        Self::translation_matrix(position) * Self::rotation_matrix(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::default());

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_model_matrix_rotates_before_translating() {
        let rotation = RotationState::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let model = Transform::model_matrix(&Vector3::new(-2.0, 0.0, 0.0), &rotation);

        // +X spun a quarter turn about Y lands on -Z, then shifts left
        let p = model.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(-2.0, 0.0, -1.0)).norm() < 1e-5);
    }
}
