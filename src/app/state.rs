use std::time::Instant;

use crate::config::{FRAME_HEIGHT, FRAME_WIDTH, SCENE_BACKGROUND, SPHERE_SUBDIVISIONS, TICK_INTERVAL};
use crate::objects::figure::{Axis, Figure, FigureKind};
use crate::render::Renderer;
use crate::render::wireframe::WireframePerformer;
use crate::render::z_buffer::ZBufferPerformer;
use crate::scene::Scene;
use eframe::egui::{Context, TextureHandle};
use image::RgbImage;
use nalgebra::Vector3;

/// Активная демонстрационная сцена.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoMode {
    Figures,
    Lighting,
    Tetrahedron,
}

pub struct FiguresApp {
    pub texture: Option<TextureHandle>,
    pub frame: RgbImage,
    pub renderer: Box<dyn Renderer>,

    // Каждый режим держит собственную сцену, переключение ничего не теряет
    pub mode: DemoMode,
    pub figures_scene: Scene,
    pub lighting_scene: Scene,
    pub tetra_scene: Scene,

    pub fps: f64,
    pub last_frame_time: Instant,
    started: Instant,
    last_tick: Instant,

    // UI state
    pub selected_index: usize,
    pub move_input: Vector3<f32>,
    pub scale_input: f32,
    pub subdivisions_input: u32,
    pub wireframe: bool,
    // Флаг: курсор находится над окном просмотра
    pub viewport_has_pointer: bool,

    // Error handling
    pub error_message: Option<String>,
}

impl Default for FiguresApp {
    fn default() -> Self {
        Self {
            texture: None,
            frame: RgbImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, SCENE_BACKGROUND),
            renderer: Box::new(ZBufferPerformer::new(FRAME_WIDTH, FRAME_HEIGHT)),
            mode: DemoMode::Figures,
            figures_scene: Scene::figures_demo(),
            lighting_scene: Scene::lighting_demo(),
            tetra_scene: Scene::tetra_demo(),
            fps: 0.0,
            last_frame_time: Instant::now(),
            started: Instant::now(),
            last_tick: Instant::now(),
            selected_index: 0,
            move_input: Vector3::zeros(),
            scale_input: 1.0,
            subdivisions_input: SPHERE_SUBDIVISIONS,
            wireframe: false,
            viewport_has_pointer: false,
            error_message: None,
        }
    }
}

impl FiguresApp {
    pub(super) fn active_scene(&self) -> &Scene {
        match self.mode {
            DemoMode::Figures => &self.figures_scene,
            DemoMode::Lighting => &self.lighting_scene,
            DemoMode::Tetrahedron => &self.tetra_scene,
        }
    }

    pub(super) fn active_scene_mut(&mut self) -> &mut Scene {
        match self.mode {
            DemoMode::Figures => &mut self.figures_scene,
            DemoMode::Lighting => &mut self.lighting_scene,
            DemoMode::Tetrahedron => &mut self.tetra_scene,
        }
    }

    pub fn switch_mode(&mut self, mode: DemoMode) {
        log::debug!("выбрана сцена {mode:?}");
        self.mode = mode;
    }

    /// Продвигает анимацию активной сцены, если истёк очередной интервал
    /// таймера. Вызывается на каждом кадре egui.
    pub fn tick(&mut self) {
        if self.last_tick.elapsed() < TICK_INTERVAL {
            return;
        }
        self.last_tick = Instant::now();
        let elapsed = self.started.elapsed().as_secs_f32();
        self.active_scene_mut().tick(elapsed);
    }

    pub fn update_frame(&mut self, ctx: &Context) {
        // Поля берём напрямую, чтобы рендерер и сцена занимались независимо
        let scene = match self.mode {
            DemoMode::Figures => &self.figures_scene,
            DemoMode::Lighting => &self.lighting_scene,
            DemoMode::Tetrahedron => &self.tetra_scene,
        };
        self.renderer.create_frame_mut(&mut self.frame, scene);

        let egui_image = egui::ColorImage::from_rgb(
            [self.frame.width() as usize, self.frame.height() as usize],
            self.frame.as_raw(),
        );

        match &mut self.texture {
            Some(texture) => texture.set(egui_image, Default::default()),
            None => {
                self.texture = Some(ctx.load_texture("rendered_image", egui_image, Default::default()));
            }
        }
    }

    pub fn update_fps(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_secs_f64();
        self.last_frame_time = now;
        self.fps = 1.0 / frame_time;
    }

    // Каждое действие над фигурой идёт через проверку номера слота; промах
    // превращается в сообщение для модального окна.
    fn with_selected_figure(&mut self, apply: impl FnOnce(&mut Figure)) {
        let index = self.selected_index;
        let error = self.active_scene_mut().figure_mut(index).map(apply).err();
        if let Some(error) = error {
            self.error_message = Some(error.to_string());
        }
    }

    pub fn add_figure(&mut self, kind: FigureKind) {
        if let Err(error) = self.active_scene_mut().add_figure(kind) {
            self.error_message = Some(error.to_string());
        }
    }

    pub fn remove_figure(&mut self) {
        self.active_scene_mut().remove_figure();
    }

    pub fn rotate_selected(&mut self, axis: Axis) {
        self.with_selected_figure(|figure| figure.enable_rotation(axis));
    }

    pub fn stop_selected(&mut self) {
        self.with_selected_figure(Figure::disable_rotation);
    }

    pub fn move_selected(&mut self) {
        let translation = self.move_input;
        self.with_selected_figure(move |figure| figure.translation = translation);
    }

    pub fn scale_selected(&mut self) {
        let scale = self.scale_input;
        self.with_selected_figure(move |figure| figure.scale = scale);
    }

    pub fn set_wireframe(&mut self, enabled: bool) {
        self.wireframe = enabled;
        self.renderer = if enabled {
            Box::new(WireframePerformer)
        } else {
            Box::new(ZBufferPerformer::new(FRAME_WIDTH, FRAME_HEIGHT))
        };
        log::info!("каркасный режим: {enabled}");
    }

    pub fn set_subdivisions(&mut self, level: u32) {
        self.subdivisions_input = level;
        self.tetra_scene.set_sphere_subdivisions(level);
    }
}

impl eframe::App for FiguresApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.update_fps();
        self.tick();
        self.mouse_wheel_scaling(ctx);
        self.render_ui(ctx);

        // Просим egui перерисовать экран к следующему тику таймера
        ctx.request_repaint_after(TICK_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_on_empty_slots_raise_the_alert() {
        let mut app = FiguresApp::default();
        app.selected_index = 1;
        app.rotate_selected(Axis::X);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Object on position 1 is not created yet")
        );
    }

    #[test]
    fn overfilling_the_scene_raises_the_alert() {
        let mut app = FiguresApp::default();
        for _ in 0..3 {
            app.add_figure(FigureKind::Cube);
        }
        assert!(app.error_message.is_none());
        app.add_figure(FigureKind::Conus);
        assert_eq!(
            app.error_message.as_deref(),
            Some("You can't add more than 3 objects")
        );
        assert_eq!(app.figures_scene.figures().len(), 3);
    }

    #[test]
    fn slider_inputs_reach_the_selected_figure() {
        let mut app = FiguresApp::default();
        app.add_figure(FigureKind::Pyramid);
        app.move_input = Vector3::new(1.0, 2.0, 3.0);
        app.scale_input = 2.5;
        app.move_selected();
        app.scale_selected();

        let figure = &app.figures_scene.figures()[0];
        assert_eq!(figure.translation, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(figure.scale, 2.5);
    }

    #[test]
    fn scene_state_survives_mode_switches() {
        let mut app = FiguresApp::default();
        app.add_figure(FigureKind::Cube);
        app.switch_mode(DemoMode::Lighting);
        app.add_figure(FigureKind::Sphere);
        app.switch_mode(DemoMode::Figures);

        assert_eq!(app.mode, DemoMode::Figures);
        assert_eq!(app.figures_scene.figures().len(), 1);
        assert_eq!(app.lighting_scene.figures().len(), 1);
        assert_eq!(app.active_scene().figures().len(), 1);
    }

    #[test]
    fn wireframe_toggle_swaps_the_renderer() {
        let mut app = FiguresApp::default();
        app.set_wireframe(true);
        assert!(app.wireframe);
        // Рендерер перезаписан, кадр по-прежнему строится.
        let scene = Scene::figures_demo();
        app.renderer.create_frame_mut(&mut app.frame, &scene);
        app.set_wireframe(false);
        assert!(!app.wireframe);
    }
}
