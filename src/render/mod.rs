pub mod wireframe;
pub mod z_buffer;

use crate::objects::Point;
use crate::objects::light::LightRig;
use crate::scene::Scene;
use image::{Rgb, RgbImage};
use nalgebra::{Matrix4, Vector3};

/// Вычисляет матрицу преобразования вьюпорта для заданных размеров изображения.
///
/// Матрица преобразует нормализованные координаты устройства (NDC) в пространство экрана.
pub(crate) fn calculate_viewport_matrix(width: u32, height: u32) -> Matrix4<f32> {
    Matrix4::new(
        width as f32 / 2.,
        0.,
        0.,
        width as f32 / 2.,
        0.,
        -(height as f32 / 2.),
        0.,
        height as f32 / 2.,
        0.,
        0.,
        1.,
        0.,
        0.,
        0.,
        0.,
        1.,
    )
}

fn calculate_color(
    lighting: Option<&LightRig>,
    base_color: [f32; 3],
    normal: &Vector3<f32>,
    world_point: &Point,
) -> Rgb<u8> {
    let base = Vector3::from(base_color);

    let color = match lighting {
        None => base,
        Some(rig) => {
            let normal = normal.normalize();

            let ambient = rig.ambient.effective_color().component_mul(&base);

            let diffuse_strength = rig.diffuse.direction.normalize().dot(&normal).max(0.);
            let diffuse = rig.diffuse.effective_color().component_mul(&base) * diffuse_strength;

            let point_direction = (rig.point.position - world_point).normalize();
            let point_strength = normal.dot(&point_direction).max(0.);
            let point = rig.point.effective_color().component_mul(&base) * point_strength;

            ambient + diffuse + point
        }
    };

    // Насыщение каналов происходит только здесь, при переводе в u8.
    let r = (color.x * 255.).clamp(0., 255.);
    let g = (color.y * 255.).clamp(0., 255.);
    let b = (color.z * 255.).clamp(0., 255.);

    Rgb([r.round() as u8, g.round() as u8, b.round() as u8])
}

pub trait Renderer {
    fn create_frame(&mut self, width: u32, height: u32, scene: &Scene) -> RgbImage {
        let mut image = RgbImage::new(width, height);
        self.create_frame_mut(&mut image, scene);
        image
    }
    fn create_frame_mut(&mut self, image: &mut RgbImage, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::light::{AmbientLight, DirectionalLight, PointLight};
    use nalgebra::Point3;

    fn rig(ambient: bool, diffuse: bool, point: bool) -> LightRig {
        LightRig {
            ambient: AmbientLight {
                color: Vector3::new(0.2, 0.2, 0.2),
                enabled: ambient,
            },
            diffuse: DirectionalLight {
                direction: Vector3::new(0.0, 0.0, 5.0),
                color: Vector3::new(0.3, 0.3, 0.3),
                enabled: diffuse,
            },
            point: PointLight {
                position: Point3::new(0.0, 0.0, 4.0),
                color: Vector3::new(1.0, 1.0, 1.0),
                enabled: point,
            },
        }
    }

    #[test]
    fn unlit_scenes_pass_the_vertex_color_through() {
        let color = calculate_color(
            None,
            [1.0, 0.5, 0.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(color, Rgb([255, 128, 0]));
    }

    #[test]
    fn all_lights_off_give_black() {
        let rig = rig(false, false, false);
        let color = calculate_color(
            Some(&rig),
            [1.0, 1.0, 1.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(color, Rgb([0, 0, 0]));
    }

    #[test]
    fn ambient_scales_the_base_color() {
        let rig = rig(true, false, false);
        let color = calculate_color(
            Some(&rig),
            [1.0, 0.5, 0.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(color, Rgb([51, 26, 0]));
    }

    #[test]
    fn diffuse_uses_the_normalized_direction() {
        let rig = rig(false, true, false);
        // Прямое попадание: нормаль совпадает с направлением на источник.
        let head_on = calculate_color(
            Some(&rig),
            [1.0, 1.0, 1.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(head_on, Rgb([77, 77, 77]));

        // Источник за спиной поверхности не подсвечивает её.
        let behind = calculate_color(
            Some(&rig),
            [1.0, 1.0, 1.0],
            &-Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(behind, Rgb([0, 0, 0]));
    }

    #[test]
    fn point_term_follows_the_surface_point() {
        let rig = rig(false, false, true);
        let lit = calculate_color(
            Some(&rig),
            [1.0, 1.0, 1.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        assert_eq!(lit, Rgb([255, 255, 255]));

        // Точка сбоку от источника освещена слабее.
        let grazing = calculate_color(
            Some(&rig),
            [1.0, 1.0, 1.0],
            &Vector3::z(),
            &Point3::new(4.0, 0.0, 4.0),
        );
        assert_eq!(grazing, Rgb([0, 0, 0]));
    }

    #[test]
    fn channels_saturate_independently() {
        let mut rig = rig(true, true, false);
        rig.ambient.color = Vector3::new(1.0, 0.1, 1.0);
        let color = calculate_color(
            Some(&rig),
            [1.0, 1.0, 0.0],
            &Vector3::z(),
            &Point3::origin(),
        );
        // r: 1.0 + 0.3 переполняется, g остаётся в диапазоне, b гасится
        // нулевым базовым цветом.
        assert_eq!(color, Rgb([255, 102, 0]));
    }

    #[test]
    fn disabling_one_light_removes_only_its_term() {
        let full = rig(true, true, true);
        let without_point = rig(true, true, false);

        let normal = Vector3::z();
        let surface = Point3::origin();
        let base = [0.5, 0.5, 0.5];

        let all = calculate_color(Some(&full), base, &normal, &surface);
        let partial = calculate_color(Some(&without_point), base, &normal, &surface);

        // 0.5 * (0.2 + 0.3 + 1.0) против 0.5 * (0.2 + 0.3)
        assert_eq!(all, Rgb([191, 191, 191]));
        assert_eq!(partial, Rgb([64, 64, 64]));
    }
}
