//! One-shot repaint control.
//!
//! egui is an immediate-mode GUI; widgets painted early in a frame do not
//! see state mutated later in the same frame. The display strip is drawn
//! above the button grid, so a click's result is one frame stale unless a
//! follow-up frame is scheduled.
//!
//! Call [`begin_frame`] at the top of `update()`, [`mark_needs_repaint`]
//! after mutating state mid-frame, and [`end_frame`] at the bottom. At most
//! one follow-up frame is issued; otherwise egui sleeps until the next
//! input event.
//!
//! [`begin_frame`]: RepaintController::begin_frame
//! [`mark_needs_repaint`]: RepaintController::mark_needs_repaint
//! [`end_frame`]: RepaintController::end_frame

#[derive(Default)]
pub struct RepaintController {
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one follow-up frame so already-painted widgets catch up.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self, _ctx: &egui::Context) {
        // This frame is the follow-up; consume the flag.
        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.needs_repaint {
            ctx.request_repaint();
        }
        // else: no scheduled repaint — egui sleeps until next input.
    }
}
