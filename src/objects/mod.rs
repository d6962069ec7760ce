use nalgebra::Point3;

pub mod camera;
pub mod figure;
pub mod light;
pub mod mesh;
pub mod subdivision;

pub type Point = Point3<f32>;
