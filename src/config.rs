use image::Rgb;
use std::time::Duration;

// Frame buffer and timer settings
pub const FRAME_WIDTH: u32 = 800;
pub const FRAME_HEIGHT: u32 = 800;
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

// Scene layout
pub const MAX_FIGURES: usize = 3;
pub const PLACEMENT_OFFSET_X: f32 = 2.0;
pub const SCENE_BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const TETRA_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// Rotation steps, degrees per tick
pub const FIGURES_ROTATION_STEP: f32 = 3.0;
pub const LIGHTING_ROTATION_STEP: f32 = 2.0;

// Tessellation settings
pub const CYLINDER_SECTORS: u32 = 100;
pub const SPHERE_SUBDIVISIONS: u32 = 3;
pub const MAX_SUBDIVISIONS: u32 = 5;
pub const SPHERE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

// Camera preset for the unlit figures demo
pub const FIGURES_EYE: [f32; 3] = [0.0, 3.0, 6.5];
pub const FIGURES_FOV_DEGREES: f32 = 45.0;
pub const FIGURES_NEAR_PLANE: f32 = 1.0;
pub const FIGURES_FAR_PLANE: f32 = 15.0;

// Camera preset for the lit demo
pub const LIGHTING_EYE: [f32; 3] = [5.0, 3.0, 9.0];
pub const LIGHTING_FOV_DEGREES: f32 = 30.0;
pub const LIGHTING_NEAR_PLANE: f32 = 1.0;
pub const LIGHTING_FAR_PLANE: f32 = 100.0;

// Camera preset for the tetrahedron demo
pub const TETRA_EYE: [f32; 3] = [0.0, 0.0, 3.0];
pub const TETRA_FOV_DEGREES: f32 = 45.0;
pub const TETRA_NEAR_PLANE: f32 = 1.0;
pub const TETRA_FAR_PLANE: f32 = 15.0;

pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

// Light defaults
pub const AMBIENT_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
pub const DIFFUSE_DIRECTION: [f32; 3] = [-1.0, 2.0, 4.0];
pub const DIFFUSE_COLOR: [f32; 3] = [0.3, 0.3, 0.3];
pub const POINT_POSITION: [f32; 3] = [3.0, 3.0, 4.0];
pub const POINT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const TETRA_LIGHT_POSITION: [f32; 3] = [5.0, 0.0, 2.0];

// Point light animation in the tetrahedron demo
pub const LIGHT_DRIFT_STEP: f32 = 0.02;
pub const LIGHT_ORBIT_SPEED: f32 = 1.0;
pub const LIGHT_ORBIT_RADIUS: f32 = 2.0;

// User interaction settings
pub const SCALING_SENSITIVITY_FACTOR: f32 = 0.002;
