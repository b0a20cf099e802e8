// ui.rs - Controls, canvas and statistics for the active automaton

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};

use automata::patterns::PATTERNS;
use automata::{AutomatonId, CellState, RunState};

use crate::input::{self, Canvas, Command};
use crate::{CellularApp, palette, render};

impl eframe::App for CellularApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in ctx.input(input::pressed_commands) {
            self.run(command);
        }
        if !self.session.is_running() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.advance();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Cellular Automata: {}", self.session.active_id()));

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_paused() { "▶ Run" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.run(Command::TogglePause);
                }

                let paused = self.session.run_state() != RunState::Running;
                if ui.add_enabled(paused, egui::Button::new("⏭ Step")).clicked() {
                    self.run(Command::Step);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.run(Command::Clear);
                }

                if ui.button("↺ Reset gen").clicked() {
                    self.run(Command::ResetGeneration);
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.horizontal(|ui| {
                ui.label("Automaton:");
                let mut selected = self.session.active_id();
                egui::ComboBox::from_id_source("automaton_selector")
                    .selected_text(selected.name())
                    .show_ui(ui, |ui| {
                        for id in AutomatonId::ALL {
                            ui.selectable_value(&mut selected, id, id.name());
                        }
                    });
                if selected != self.session.active_id() {
                    self.run(Command::Select(selected));
                }

                ui.separator();

                ui.label("Brush:");
                let mut brush = self.session.paintbrush();
                egui::ComboBox::from_id_source("brush_selector")
                    .selected_text(brush.name())
                    .show_ui(ui, |ui| {
                        for state in CellState::ALL {
                            ui.selectable_value(&mut brush, state, state.name());
                        }
                    });
                if brush != self.session.paintbrush() {
                    self.run(Command::Brush(brush));
                }

                ui.separator();

                // Pattern dropdown, limited to presets for the active rule
                let rule = self.session.active().rule();
                let current = PATTERNS
                    .get(self.selected_pattern)
                    .filter(|p| p.fits(rule))
                    .map_or("none", |p| p.name);
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate().filter(|(_, p)| p.fits(rule)) {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.load_selected_pattern();
                }
            });

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Delay:");
                let mut speed = self.session.speed();
                if ui
                    .add(egui::Slider::new(&mut speed, 0..=60).suffix(" frames/gen"))
                    .changed()
                {
                    self.session.set_speed(speed);
                }
            });

            ui.label(
                "Left drag paints, right click erases, hold Shift and release to paint a line. \
                 Ctrl+0..7 switch automaton, 0..7 pick a brush, Space steps while paused.",
            );

            ui.separator();

            self.draw_canvas(ui);

            ui.separator();

            // Statistics
            let grid = self.session.active().grid().borrow();
            let total = grid.len();
            ui.horizontal(|ui| {
                for &state in self.session.active().rule().alphabet() {
                    if state != CellState::Empty {
                        ui.colored_label(palette::color(state), format!("{state}: {}", grid.count(state)));
                    }
                }
                let occupied = total - grid.count(CellState::Empty);
                ui.label(format!(
                    "Population: {:.1}%",
                    occupied as f32 / total as f32 * 100.0
                ));
            });
        });

        ctx.request_repaint_after(self.frame_interval);
    }
}

impl CellularApp {
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        // 1-D automata draw one row per generation, so cells stay square
        let side = self.session.active().grid().borrow().side();
        let cell = self.canvas_size / side as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::splat(self.canvas_size), Sense::click_and_drag());
        let canvas = Canvas {
            rect: response.rect,
            cell_width: cell,
            cell_height: cell,
        };

        let session = &mut self.session;
        let mouse = &mut self.mouse;
        ui.ctx().input(|i| mouse.handle(session, i, canvas));

        let image = {
            let grid = self.session.active().grid().borrow();
            render::grid_image(&grid, &self.history)
        };
        let texture = self.texture.get_or_insert_with(|| {
            ui.ctx()
                .load_texture("cells", egui::ColorImage::new(image.size, Color32::BLACK), egui::TextureOptions::NEAREST)
        });
        texture.set(image, egui::TextureOptions::NEAREST);

        painter.image(
            texture.id(),
            response.rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        // Ant marker
        if let Some(ant) = self.session.ant_position() {
            let min = canvas.rect.min + Vec2::new(ant.col as f32 * cell, ant.row as f32 * cell);
            let rect = Rect::from_min_size(min, Vec2::splat(cell));
            painter.rect_filled(rect, 0.0, palette::ANT);
        }

        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));
    }
}
