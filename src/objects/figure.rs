use crate::objects::mesh::Mesh;
use nalgebra::{Matrix4, Vector3};

/// Figure kinds offered by the demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Cube,
    Pyramid,
    Cylinder,
    Conus,
    Sphere,
}

impl FigureKind {
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Cube,
        FigureKind::Pyramid,
        FigureKind::Cylinder,
        FigureKind::Conus,
        FigureKind::Sphere,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FigureKind::Cube => "Куб",
            FigureKind::Pyramid => "Пирамида",
            FigureKind::Cylinder => "Цилиндр",
            FigureKind::Conus => "Конус",
            FigureKind::Sphere => "Сфера",
        }
    }
}

/// Rotation axis selectable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit_vector(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Spin state of a figure: the axis, the accumulated angle and whether the
/// angle advances on scene ticks.
#[derive(Debug, Clone)]
pub struct Rotation {
    pub axis: Vector3<f32>,
    pub angle_degrees: f32,
    pub enabled: bool,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            axis: Vector3::x(),
            angle_degrees: 0.0,
            enabled: false,
        }
    }
}

/// A figure placed in a scene: an immutable mesh plus the live transform
/// state driven by the UI and the animation timer.
#[derive(Debug)]
pub struct Figure {
    mesh: Mesh,
    rotation: Rotation,
    default_placement: Vector3<f32>,
    pub translation: Vector3<f32>,
    pub scale: f32,
}

impl Figure {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            rotation: Rotation::default(),
            default_placement: Vector3::zeros(),
            translation: Vector3::zeros(),
            scale: 1.0,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn default_placement(&self) -> Vector3<f32> {
        self.default_placement
    }

    /// Slot placement assigned once when the figure enters a scene.
    pub(crate) fn set_default_placement(&mut self, placement: Vector3<f32>) {
        self.default_placement = placement;
    }

    /// Swaps the mesh while keeping the transform state untouched.
    pub(crate) fn replace_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    /// Starts spinning around `axis`. The accumulated angle is kept, so
    /// switching the axis mid-flight does not snap the figure back.
    pub fn enable_rotation(&mut self, axis: Axis) {
        self.rotation.axis = axis.unit_vector();
        self.rotation.enabled = true;
    }

    /// Stops the spin and resets the accumulated angle.
    pub fn disable_rotation(&mut self) {
        self.rotation.enabled = false;
        self.rotation.angle_degrees = 0.0;
    }

    /// One animation step; does nothing while the spin is off.
    pub fn advance_rotation(&mut self, step_degrees: f32) {
        if self.rotation.enabled {
            self.rotation.angle_degrees += step_degrees;
        }
    }

    /// Placement part of the model matrix: scale, then the slot placement
    /// plus the user translation.
    pub fn transform_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&(self.default_placement + self.translation))
            * Matrix4::new_scaling(self.scale)
    }

    /// Spin part of the model matrix, applied in object space.
    pub fn rotate_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_rotation(self.rotation.axis * self.rotation.angle_degrees.to_radians())
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.transform_matrix() * self.rotate_matrix()
    }
}
