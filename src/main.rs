//! deskcalc — a four-function desktop calculator.
//!
//! Numeric entry, + - * /, clear, and equals, over a button grid and a
//! live display. Chained operations evaluate left-to-right.

mod app;
mod engine;
mod repaint;
mod theme;

use app::CalcApp;
use eframe::NativeOptions;

const WINDOW_WIDTH: f32 = 280.0;
const WINDOW_HEIGHT: f32 = 392.0;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            theme::Theme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc))
        }),
    )
}
