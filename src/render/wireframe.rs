use crate::objects::figure::Figure;
use crate::render::{Renderer, calculate_viewport_matrix};
use crate::scene::Scene;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use nalgebra::{Matrix4, Point3};

/// Draws every figure as triangle outlines with small vertex markers,
/// skipping shading and the depth test entirely.
pub struct WireframePerformer;

impl WireframePerformer {
    fn draw_figure(
        image: &mut RgbImage,
        figure: &Figure,
        camera_matrix: &Matrix4<f32>,
        color: Rgb<u8>,
    ) {
        let (width, height) = image.dimensions();

        // Calculate the MVPV matrix once
        let mvpv_matrix = calculate_viewport_matrix(width, height) * camera_matrix * figure.model_matrix();

        // Вершина на плоскости камеры (w == 0) не проецируется.
        let screen_vertices: Vec<Option<Point3<f32>>> = figure
            .mesh()
            .vertices()
            .iter()
            .map(|v| Point3::from_homogeneous(mvpv_matrix * v.position.to_homogeneous()))
            .collect();

        for (a, b, c) in figure.mesh().triangles() {
            let (Some(v0), Some(v1), Some(v2)) =
                (screen_vertices[a], screen_vertices[b], screen_vertices[c])
            else {
                continue;
            };

            draw_hollow_polygon_mut(
                image,
                &[
                    Point::new(v0.x, v0.y),
                    Point::new(v1.x, v1.y),
                    Point::new(v2.x, v2.y),
                ],
                color,
            );
        }

        for v in screen_vertices.iter().flatten() {
            draw_filled_rect_mut(
                image,
                Rect::at(v.x.round() as i32 - 2, v.y.round() as i32 - 2).of_size(4, 4),
                color,
            );
        }
    }
}

impl Renderer for WireframePerformer {
    fn create_frame_mut(&mut self, image: &mut RgbImage, scene: &Scene) {
        image.pixels_mut().for_each(|px| *px = scene.background);

        // Линии контрастного цвета видны и на чёрном, и на белом фоне.
        let [r, g, b] = scene.background.0;
        let line_color = Rgb([255 - r, 255 - g, 255 - b]);

        let camera_matrix = scene.camera.camera_matrix();
        for figure in scene.figures() {
            Self::draw_figure(image, figure, &camera_matrix, line_color);
        }
    }
}
