pub mod app;
pub mod config;
pub mod objects;
pub mod render;
pub mod scene;
pub mod utils;
