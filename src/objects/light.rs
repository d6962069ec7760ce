use crate::config::{
    AMBIENT_COLOR, DIFFUSE_COLOR, DIFFUSE_DIRECTION, LIGHT_DRIFT_STEP, LIGHT_ORBIT_RADIUS,
    LIGHT_ORBIT_SPEED, POINT_COLOR, POINT_POSITION, TETRA_LIGHT_POSITION,
};
use crate::objects::Point;
use nalgebra::Vector3;

/// Uniform fill light.
pub struct AmbientLight {
    pub color: Vector3<f32>,
    pub enabled: bool,
}

/// Parallel-ray light; `direction` points from the surface toward the light.
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
    pub enabled: bool,
}

/// Positional light without distance falloff.
pub struct PointLight {
    pub position: Point,
    pub color: Vector3<f32>,
    pub enabled: bool,
}

impl AmbientLight {
    /// The color the shader sees: black while the light is switched off.
    pub fn effective_color(&self) -> Vector3<f32> {
        if self.enabled { self.color } else { Vector3::zeros() }
    }
}

impl DirectionalLight {
    pub fn effective_color(&self) -> Vector3<f32> {
        if self.enabled { self.color } else { Vector3::zeros() }
    }
}

impl PointLight {
    pub fn effective_color(&self) -> Vector3<f32> {
        if self.enabled { self.color } else { Vector3::zeros() }
    }
}

/// The three independently switchable light sources of the lit scenes.
pub struct LightRig {
    pub ambient: AmbientLight,
    pub diffuse: DirectionalLight,
    pub point: PointLight,
}

impl LightRig {
    /// Stock rig of the lit figure scene, all three sources on.
    pub fn standard() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vector3::from(AMBIENT_COLOR),
                enabled: true,
            },
            diffuse: DirectionalLight {
                direction: Vector3::from(DIFFUSE_DIRECTION),
                color: Vector3::from(DIFFUSE_COLOR),
                enabled: true,
            },
            point: PointLight {
                position: Point::from(POINT_POSITION),
                color: Vector3::from(POINT_COLOR),
                enabled: true,
            },
        }
    }

    /// Rig of the tetrahedron scene: ambient fill plus the animated point
    /// light, no directional source.
    pub fn tetra() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vector3::from(AMBIENT_COLOR),
                enabled: true,
            },
            diffuse: DirectionalLight {
                direction: Vector3::from(DIFFUSE_DIRECTION),
                color: Vector3::from(DIFFUSE_COLOR),
                enabled: false,
            },
            point: PointLight {
                position: Point::from(TETRA_LIGHT_POSITION),
                color: Vector3::from(POINT_COLOR),
                enabled: true,
            },
        }
    }
}

/// Point light motion policies of the tetrahedron scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightAnimation {
    /// Constant slide along negative x, one step per tick.
    Drift,
    /// Orbit in polar coordinates driven by elapsed time.
    PolarOrbit,
}

impl LightAnimation {
    /// Moves the light one step. `elapsed_seconds` counts from scene start
    /// and only matters for the orbit.
    pub fn advance(self, light: &mut PointLight, elapsed_seconds: f32) {
        match self {
            LightAnimation::Drift => light.position.x -= LIGHT_DRIFT_STEP,
            LightAnimation::PolarOrbit => {
                let t = elapsed_seconds * LIGHT_ORBIT_SPEED;
                light.position.x = LIGHT_ORBIT_RADIUS * t.sin();
                light.position.y = t.cos();
            }
        }
    }
}
