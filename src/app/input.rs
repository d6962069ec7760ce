use super::state::FiguresApp;
use crate::config::SCALING_SENSITIVITY_FACTOR;
use eframe::egui::Context;

impl FiguresApp {
    pub fn mouse_wheel_scaling(&mut self, ctx: &Context) {
        // Масштабирование работает только если курсор над окном просмотра
        if !self.viewport_has_pointer {
            return;
        }
        let scroll_delta = ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y == 0.0 {
            return;
        }
        let scaling_factor =
            (1. + scroll_delta.y.max(-200.) * SCALING_SENSITIVITY_FACTOR).max(f32::EPSILON);

        // Прокрутка над пустым слотом молча игнорируется, окно с ошибкой
        // остаётся за кнопками.
        let index = self.selected_index;
        if let Ok(figure) = self.active_scene_mut().figure_mut(index) {
            figure.scale *= scaling_factor;
        }
    }
}
