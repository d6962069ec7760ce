use super::state::{DemoMode, FiguresApp};
use crate::config::{MAX_FIGURES, MAX_SUBDIVISIONS};
use crate::objects::figure::{Axis, FigureKind};
use crate::objects::light::LightAnimation;
use eframe::egui::{CentralPanel, Context, ScrollArea, SidePanel, Ui, Vec2};

impl FiguresApp {
    pub fn render_ui(&mut self, ctx: &Context) {
        // Настройка глобальных стилей
        self.setup_custom_styles(ctx);

        // Правая панель с элементами управления
        SidePanel::right("controls_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                // Добавляем прокрутку для всего содержимого панели
                ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.style_mut().spacing.slider_width = 200.0;
                        ui.heading("⚙ Управление");
                        ui.add_space(10.0);

                        // Набор секций зависит от активной сцены
                        match self.mode {
                            DemoMode::Figures => {
                                self.render_figure_controls(ui);
                                self.render_object_controls(ui);
                                self.render_camera_controls(ui);
                            }
                            DemoMode::Lighting => {
                                self.render_figure_controls(ui);
                                self.render_object_controls(ui);
                                self.render_camera_controls(ui);
                                self.render_light_controls(ui);
                            }
                            DemoMode::Tetrahedron => {
                                self.render_tetra_controls(ui);
                                self.render_light_controls(ui);
                            }
                        }

                        self.render_renderer_controls(ui);

                        // Добавляем немного пространства внизу для удобства прокрутки
                        ui.add_space(10.0);
                    });
            });

        // Центральная панель с окном просмотра
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("🧊 Трёхмерные сцены");
            ui.add_space(5.0);

            // Переключатель сцен сверху
            self.render_mode_controls(ui);

            // Отображение изображения
            self.render_viewport(ui);
        });

        // Модальное окно с ошибкой
        if let Some(error_msg) = self.error_message.clone() {
            egui::Window::new("⚠ Ошибка")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(error_msg);
                    ui.separator();
                    if self.styled_button(ui, "OK", Vec2::new(120.0, 32.0)).clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Обновляем кадр
        self.update_frame(ctx);
    }

    fn setup_custom_styles(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();

        // Увеличиваем размер текста для заголовков
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );

        // Увеличиваем размер обычного текста
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        // Увеличиваем отступы в кнопках
        style.spacing.button_padding = Vec2::new(10.0, 6.0);
        style.spacing.item_spacing = Vec2::new(8.0, 8.0);

        ctx.set_style(style);
    }

    // Вспомогательная функция для создания стилизованных кнопок
    fn styled_button(&self, ui: &mut Ui, text: &str, min_size: Vec2) -> egui::Response {
        ui.add_sized(min_size, egui::Button::new(text))
    }

    fn render_mode_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(5.0);

        // Строка с переключателем сцен и FPS справа
        ui.horizontal(|ui| {
            ui.label("👁 Сцена:");

            ui.spacing_mut().item_spacing.x = 8.0;
            let mut mode = self.mode.clone();
            ui.selectable_value(&mut mode, DemoMode::Figures, "📦 Фигуры");
            ui.selectable_value(&mut mode, DemoMode::Lighting, "💡 Освещение");
            ui.selectable_value(&mut mode, DemoMode::Tetrahedron, "🔺 Тетраэдр");
            if mode != self.mode {
                self.switch_mode(mode);
            }

            // Прижимаем FPS к правому краю
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {}", self.fps as u32));
                ui.label("📊");
            });
        });

        ui.add_space(8.0);
    }

    fn render_figure_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(5.0);
        ui.label(format!("➕ Фигуры (не более {MAX_FIGURES}):"));
        ui.add_space(5.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.horizontal_wrapped(|ui| {
                    for kind in FigureKind::ALL {
                        // Сфера появляется только в сцене с освещением
                        if kind == FigureKind::Sphere && self.mode == DemoMode::Figures {
                            continue;
                        }
                        if ui.button(kind.title()).clicked() {
                            self.add_figure(kind);
                        }
                    }
                });

                ui.add_space(5.0);
                if self
                    .styled_button(ui, "🗑 Удалить последнюю", Vec2::new(ui.available_width(), 32.0))
                    .clicked()
                {
                    self.remove_figure();
                }
            });
        });

        ui.label(format!(
            "Фигур на сцене: {} из {MAX_FIGURES}",
            self.active_scene().figures().len()
        ));
    }

    fn render_object_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(10.0);
        ui.label("🎯 Управление объектом:");
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Номер объекта:");
            ui.add(egui::Slider::new(&mut self.selected_index, 0..=MAX_FIGURES - 1));
        });

        // Вращение
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label("🔄 Вращение:");
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    if self.styled_button(ui, "Вокруг X", Vec2::new(90.0, 32.0)).clicked() {
                        self.rotate_selected(Axis::X);
                    }
                    if self.styled_button(ui, "Вокруг Y", Vec2::new(90.0, 32.0)).clicked() {
                        self.rotate_selected(Axis::Y);
                    }
                    if self.styled_button(ui, "Вокруг Z", Vec2::new(90.0, 32.0)).clicked() {
                        self.rotate_selected(Axis::Z);
                    }
                });

                if self
                    .styled_button(ui, "⏹ Остановить", Vec2::new(ui.available_width(), 32.0))
                    .clicked()
                {
                    self.stop_selected();
                }
            });
        });

        ui.add_space(8.0);

        // Перемещение
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label("📐 Перемещение:");
                ui.add_space(3.0);

                let mut changed = false;
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.move_input.x, -5.0..=5.0)
                            .step_by(0.1)
                            .fixed_decimals(1)
                            .text("X"),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.move_input.y, -5.0..=5.0)
                            .step_by(0.1)
                            .fixed_decimals(1)
                            .text("Y"),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.move_input.z, -5.0..=5.0)
                            .step_by(0.1)
                            .fixed_decimals(1)
                            .text("Z"),
                    )
                    .changed();

                if changed {
                    self.move_selected();
                }
            });
        });

        ui.add_space(8.0);

        // Масштабирование
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label("🔍 Масштаб:");
                ui.add_space(3.0);

                if ui
                    .add(
                        egui::Slider::new(&mut self.scale_input, 0.1..=3.0)
                            .step_by(0.05)
                            .fixed_decimals(2),
                    )
                    .changed()
                {
                    self.scale_selected();
                }
            });
        });
    }

    fn render_camera_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(10.0);
        ui.label("🎥 Камера:");
        ui.add_space(5.0);

        let camera = &mut self.active_scene_mut().camera;
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::Slider::new(&mut camera.fov_degrees, 10.0..=120.0)
                        .fixed_decimals(0)
                        .text("Поле зрения"),
                );
                ui.add(
                    egui::Slider::new(&mut camera.aspect_ratio, 0.5..=2.0)
                        .step_by(0.05)
                        .fixed_decimals(2)
                        .text("Соотношение сторон"),
                );
                ui.add(
                    egui::Slider::new(&mut camera.near_plane, 0.1..=5.0)
                        .step_by(0.1)
                        .fixed_decimals(1)
                        .text("Ближняя плоскость"),
                );
                ui.add(
                    egui::Slider::new(&mut camera.far_plane, 5.0..=100.0)
                        .fixed_decimals(0)
                        .text("Дальняя плоскость"),
                );

                ui.add_space(5.0);
                ui.label("Положение камеры:");
                ui.add(
                    egui::Slider::new(&mut camera.eye.x, -10.0..=10.0)
                        .step_by(0.1)
                        .fixed_decimals(1)
                        .text("X"),
                );
                ui.add(
                    egui::Slider::new(&mut camera.eye.y, -10.0..=10.0)
                        .step_by(0.1)
                        .fixed_decimals(1)
                        .text("Y"),
                );
                ui.add(
                    egui::Slider::new(&mut camera.eye.z, -10.0..=10.0)
                        .step_by(0.1)
                        .fixed_decimals(1)
                        .text("Z"),
                );
            });
        });
    }

    fn render_light_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(10.0);
        ui.label("💡 Источники света:");
        ui.add_space(5.0);

        if let Some(rig) = self.active_scene_mut().lighting.as_mut() {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.checkbox(&mut rig.ambient.enabled, "Фоновый свет");
                    ui.checkbox(&mut rig.diffuse.enabled, "Рассеянный свет");
                    ui.checkbox(&mut rig.point.enabled, "Точечный свет");
                });
            });
        }
    }

    fn render_tetra_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(5.0);
        ui.label("🔺 Сфера из тетраэдра:");
        ui.add_space(5.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                let mut level = self.subdivisions_input;
                if ui
                    .add(
                        egui::Slider::new(&mut level, 0..=MAX_SUBDIVISIONS)
                            .text("Глубина разбиения"),
                    )
                    .changed()
                {
                    self.set_subdivisions(level);
                }
                ui.label(format!(
                    "Треугольников: {}",
                    self.tetra_scene
                        .figures()
                        .first()
                        .map_or(0, |figure| figure.mesh().triangle_count())
                ));

                ui.add_space(5.0);
                ui.label("Движение света:");
                ui.horizontal(|ui| {
                    let mut animation = self
                        .tetra_scene
                        .light_animation()
                        .unwrap_or(LightAnimation::PolarOrbit);
                    let before = animation;
                    ui.selectable_value(&mut animation, LightAnimation::PolarOrbit, "Орбита");
                    ui.selectable_value(&mut animation, LightAnimation::Drift, "Сдвиг");
                    if animation != before {
                        self.tetra_scene.set_light_animation(animation);
                    }
                });
            });
        });
    }

    fn render_renderer_controls(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(5.0);

        let mut wireframe = self.wireframe;
        if ui.checkbox(&mut wireframe, "Каркасный режим").changed() {
            self.set_wireframe(wireframe);
        }
    }

    fn render_viewport(&mut self, ui: &mut Ui) {
        ui.separator();

        // Кадр квадратный, вписываем его в доступное пространство
        let available_size = ui.available_size();
        let side = available_size.x.min(available_size.y);

        if let Some(texture) = &self.texture {
            let resp = ui.image((texture.id(), Vec2::splat(side)));
            // Обновляем флаг наличия курсора над viewport
            self.viewport_has_pointer = resp.hovered();
        } else {
            // Текстуры нет — курсор над viewport отсутствует
            self.viewport_has_pointer = false;
        }
    }
}

