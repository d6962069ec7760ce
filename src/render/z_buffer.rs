use crate::objects::Point;
use crate::objects::figure::Figure;
use crate::objects::light::LightRig;
use crate::objects::mesh::Vertex;
use crate::render::{Renderer, calculate_color, calculate_viewport_matrix};
use crate::scene::Scene;
use image::{Rgb, RgbImage};
use nalgebra::{Matrix4, Point3};

#[derive(Default)]
pub struct ZBufferPerformer {
    width: u32,
    height: u32,
    z_buffer: Vec<f32>,
}

impl ZBufferPerformer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            z_buffer: vec![f32::INFINITY; (width * height) as usize],
        }
    }

    fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.z_buffer
            .resize((width * height) as usize, f32::INFINITY);
        self.z_buffer.fill(f32::INFINITY);
    }

    /// Устанавливает значение глубины в указанных координатах.
    fn set_depth(&mut self, x: u32, y: u32, depth: f32) {
        let index = (y * self.width + x) as usize;
        self.z_buffer[index] = depth;
    }

    /// Получает значение глубины в указанных координатах.
    fn get_depth(&self, x: u32, y: u32) -> f32 {
        let index = (y * self.width + x) as usize;
        self.z_buffer[index]
    }

    /// Преобразует вершины фигуры в пространство изображения.
    ///
    /// Применяет последовательность преобразований: модель -> вид -> проекция -> вьюпорт.
    /// Вершина на плоскости камеры (w == 0) не проецируется и даёт `None`.
    fn transform_vertices_to_screen(
        vertices: &[Vertex],
        mvpv_matrix: &Matrix4<f32>,
    ) -> Vec<Option<Point>> {
        vertices
            .iter()
            .map(|v| Point3::from_homogeneous(mvpv_matrix * v.position.to_homogeneous()))
            .collect()
    }

    fn draw_triangle(&mut self, image: &mut RgbImage, tri: &[Point; 3], tri_colors: &[Rgb<u8>; 3]) {
        let [p1, p2, p3] = *tri;

        // Находим ограничивающий прямоугольник, ограничивая размерами изображения.
        let min_x = (p1.x.min(p2.x).min(p3.x).round() as u32).max(0);
        let max_x = (p1.x.max(p2.x).max(p3.x).round() as u32).min(self.width - 1);
        let min_y = (p1.y.min(p2.y).min(p3.y).round() as u32).max(0);
        let max_y = (p1.y.max(p2.y).max(p3.y).round() as u32).min(self.height - 1);

        // Предварительно вычисляем общие компоненты, чтобы избежать избыточных вычислений в цикле.
        let denom = (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x);
        if denom.abs() < f32::EPSILON {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Вычисляем барицентрические координаты.
                let u =
                    ((p3.x - p2.x) * (y as f32 - p2.y) - (p3.y - p2.y) * (x as f32 - p2.x)) / denom;
                let v =
                    ((p1.x - p3.x) * (y as f32 - p3.y) - (p1.y - p3.y) * (x as f32 - p3.x)) / denom;

                let bary = Point3::new(u, v, 1.0 - u - v);

                // Проверяем, находится ли пиксель внутри треугольника.
                if bary.x > -f32::EPSILON && bary.y > -f32::EPSILON && bary.z > -f32::EPSILON {
                    let z = p1.z * bary.x + p2.z * bary.y + p3.z * bary.z;

                    // Выполняем проверку по Z-буферу.
                    if z < self.get_depth(x, y) {
                        self.set_depth(x, y, z);

                        // Интерполируем цвета корректно для каждого канала.
                        let r = (bary.x * tri_colors[0].0[0] as f32
                            + bary.y * tri_colors[1].0[0] as f32
                            + bary.z * tri_colors[2].0[0] as f32)
                            .clamp(0.0, 255.0) as u8;
                        let g = (bary.x * tri_colors[0].0[1] as f32
                            + bary.y * tri_colors[1].0[1] as f32
                            + bary.z * tri_colors[2].0[1] as f32)
                            .clamp(0.0, 255.0) as u8;
                        let b = (bary.x * tri_colors[0].0[2] as f32
                            + bary.y * tri_colors[1].0[2] as f32
                            + bary.z * tri_colors[2].0[2] as f32)
                            .clamp(0.0, 255.0) as u8;

                        image.put_pixel(x, y, Rgb([r, g, b]));
                    }
                }
            }
        }
    }

    fn draw_figure(
        &mut self,
        image: &mut RgbImage,
        figure: &Figure,
        camera_matrix: &Matrix4<f32>,
        lighting: Option<&LightRig>,
    ) {
        let (width, height) = image.dimensions();
        let model_matrix = figure.model_matrix();
        let mvp_matrix = camera_matrix * model_matrix;
        let viewport_matrix = calculate_viewport_matrix(width, height);
        let mvpv_matrix = viewport_matrix * mvp_matrix;

        let mesh = figure.mesh();
        let screen_vertices = Self::transform_vertices_to_screen(mesh.vertices(), &mvpv_matrix);

        // Нормальная матрица держит нормали перпендикулярными поверхности при
        // неравномерном масштабе; для вырожденной модели остаётся единичная.
        let normal_matrix = model_matrix
            .try_inverse()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix4::identity);

        let vertex_colors: Vec<Rgb<u8>> = mesh
            .vertices()
            .iter()
            .zip(mesh.normals())
            .map(|(vertex, normal)| {
                let world_point = model_matrix.transform_point(&vertex.position);
                let world_normal = (normal_matrix * normal.to_homogeneous()).xyz();
                calculate_color(lighting, vertex.color, &world_normal, &world_point)
            })
            .collect();

        for (a, b, c) in mesh.triangles() {
            // Треугольник с непроецируемой вершиной пропускаем целиком.
            let (Some(p1), Some(p2), Some(p3)) =
                (screen_vertices[a], screen_vertices[b], screen_vertices[c])
            else {
                continue;
            };
            self.draw_triangle(
                image,
                &[p1, p2, p3],
                &[vertex_colors[a], vertex_colors[b], vertex_colors[c]],
            );
        }
    }
}

impl Renderer for ZBufferPerformer {
    fn create_frame_mut(&mut self, image: &mut RgbImage, scene: &Scene) {
        let (width, height) = image.dimensions();
        self.reset(width, height);
        image.pixels_mut().for_each(|px| *px = scene.background);

        let camera_matrix = scene.camera.camera_matrix();
        for figure in scene.figures() {
            self.draw_figure(image, figure, &camera_matrix, scene.lighting.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCENE_BACKGROUND;
    use crate::objects::figure::FigureKind;

    #[test]
    fn empty_scene_renders_the_background() {
        let scene = Scene::figures_demo();
        let mut performer = ZBufferPerformer::new(64, 64);
        let frame = performer.create_frame(64, 64, &scene);
        assert!(frame.pixels().all(|px| *px == SCENE_BACKGROUND));
    }

    #[test]
    fn figure_covers_center_pixels() {
        let mut scene = Scene::figures_demo();
        scene.add_figure(FigureKind::Cube).unwrap();
        scene.add_figure(FigureKind::Cube).unwrap();

        let mut performer = ZBufferPerformer::new(64, 64);
        let frame = performer.create_frame(64, 64, &scene);
        // Средняя фигура занимает центр кадра.
        assert_ne!(*frame.get_pixel(32, 32), SCENE_BACKGROUND);
    }

    #[test]
    fn depth_test_keeps_the_nearer_triangle() {
        let mut performer = ZBufferPerformer::new(8, 8);
        performer.reset(8, 8);
        let mut image = RgbImage::new(8, 8);

        let far = [
            Point::new(0.0, 0.0, 0.9),
            Point::new(7.0, 0.0, 0.9),
            Point::new(0.0, 7.0, 0.9),
        ];
        let near = [
            Point::new(0.0, 0.0, 0.1),
            Point::new(7.0, 0.0, 0.1),
            Point::new(0.0, 7.0, 0.1),
        ];
        let red = [Rgb([255, 0, 0]); 3];
        let blue = [Rgb([0, 0, 255]); 3];

        performer.draw_triangle(&mut image, &far, &red);
        performer.draw_triangle(&mut image, &near, &blue);
        assert_eq!(*image.get_pixel(1, 1), Rgb([0, 0, 255]));

        // Более дальний треугольник больше не перерисовывает пиксель.
        performer.draw_triangle(&mut image, &far, &red);
        assert_eq!(*image.get_pixel(1, 1), Rgb([0, 0, 255]));
    }

    #[test]
    fn flat_color_triangle_interpolates_to_itself() {
        let mut performer = ZBufferPerformer::new(16, 16);
        performer.reset(16, 16);
        let mut image = RgbImage::new(16, 16);

        let tri = [
            Point::new(0.0, 0.0, 0.5),
            Point::new(15.0, 0.0, 0.5),
            Point::new(0.0, 15.0, 0.5),
        ];
        performer.draw_triangle(&mut image, &tri, &[Rgb([10, 200, 30]); 3]);
        assert_eq!(*image.get_pixel(2, 2), Rgb([10, 200, 30]));
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let mut performer = ZBufferPerformer::new(8, 8);
        performer.reset(8, 8);
        let mut image = RgbImage::from_pixel(8, 8, Rgb([7, 7, 7]));

        let line = [
            Point::new(1.0, 1.0, 0.5),
            Point::new(5.0, 5.0, 0.5),
            Point::new(3.0, 3.0, 0.5),
        ];
        performer.draw_triangle(&mut image, &line, &[Rgb([255, 255, 255]); 3]);
        assert!(image.pixels().all(|px| *px == Rgb([7, 7, 7])));
    }

    #[test]
    fn vertex_on_the_camera_plane_is_skipped() {
        let mut scene = Scene::figures_demo();
        scene.camera.eye = Point::new(0.0, 0.0, 5.0);
        scene.add_figure(FigureKind::Cube).unwrap();
        scene.add_figure(FigureKind::Cube).unwrap();
        // Передняя грань среднего куба ложится ровно на плоскость камеры.
        scene.figure_mut(1).unwrap().translation.z = 4.5;

        let mut performer = ZBufferPerformer::new(32, 32);
        let frame = performer.create_frame(32, 32, &scene);
        // Остальная геометрия по-прежнему дорисовывается.
        assert!(frame.pixels().any(|px| *px != SCENE_BACKGROUND));
    }

    #[test]
    fn lit_cube_front_face_is_brighter_than_unlit_ambient() {
        let mut scene = Scene::lighting_demo();
        scene.add_figure(FigureKind::Cube).unwrap();
        scene.add_figure(FigureKind::Cube).unwrap();

        let mut performer = ZBufferPerformer::new(64, 64);
        let frame = performer.create_frame(64, 64, &scene);

        let full = *frame.get_pixel(32, 32);

        if let Some(rig) = scene.lighting.as_mut() {
            rig.diffuse.enabled = false;
            rig.point.enabled = false;
        }
        let ambient_frame = performer.create_frame(64, 64, &scene);
        let ambient = *ambient_frame.get_pixel(32, 32);

        assert!(full.0[0] >= ambient.0[0]);
        let brightness = |px: Rgb<u8>| px.0.iter().map(|&c| c as u32).sum::<u32>();
        assert!(brightness(full) > brightness(ambient));
    }
}
