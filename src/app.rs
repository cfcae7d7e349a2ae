//! Calculator window — display strip, clear row, 4x4 button grid.

use egui::Context;

use crate::engine::{Engine, Event, Operator};
use crate::repaint::RepaintController;
use crate::theme::{menu_bar, Palette};

/// Button labels in the standard calculator layout, row by row.
const GRID_LABELS: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

const BUTTON_HEIGHT: f32 = 44.0;
const DISPLAY_FONT_SIZE: f32 = 36.0;

pub struct CalcApp {
    engine: Engine,
    show_about: bool,
    repaint: RepaintController,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            engine: Engine::new(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn event_for(label: &str) -> Option<Event> {
        match label {
            "." => Some(Event::DecimalPoint),
            "=" => Some(Event::Equals),
            "+" => Some(Event::Operator(Operator::Add)),
            "-" => Some(Event::Operator(Operator::Subtract)),
            "*" => Some(Event::Operator(Operator::Multiply)),
            "/" => Some(Event::Operator(Operator::Divide)),
            digit => digit.parse::<u8>().ok().map(Event::Digit),
        }
    }

    fn dispatch(&mut self, event: Event) {
        self.engine.handle_event(event);
        // The display strip was painted before the grid; catch it up.
        self.repaint.mark_needs_repaint();
    }

    fn render_button(&self, ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
        ui.add_sized([width, height], egui::Button::new(label)).clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 56.0;
        egui::Frame::none()
            .fill(Palette::WHITE)
            .stroke(egui::Stroke::new(1.0, Palette::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.engine.display_text())
                            .font(egui::FontId::proportional(DISPLAY_FONT_SIZE))
                            .strong(),
                    );
                });
            });
    }

    fn render_clear(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            egui::RichText::new("C").color(Palette::WHITE).strong(),
        )
        .fill(Palette::CLEAR_RED);
        if ui.add_sized([ui.available_width(), BUTTON_HEIGHT], button).clicked() {
            self.dispatch(Event::Clear);
        }
    }

    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - 3.0 * gap) / 4.0;

        for row in GRID_LABELS {
            ui.horizontal(|ui| {
                for label in row {
                    if self.render_button(ui, label, btn_w, BUTTON_HEIGHT) {
                        if let Some(event) = Self::event_for(label) {
                            self.dispatch(event);
                        }
                    }
                }
            });
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Palette::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_clear(ui);
                ui.add_space(4.0);
                self.render_grid(ui);
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calculator");
                        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(4.0);
                        ui.label("four operations, one window");
                    });
                    ui.add_space(4.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.repaint.end_frame(ctx);
    }
}
