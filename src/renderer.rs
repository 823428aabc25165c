use eframe::egui::{self, Color32};

use crate::context::SketchContext;
use crate::element::Element;

/// Per-frame composite pass over the sketch state.
///
/// The pass is idempotent and unconditional: clear, committed entities
/// oldest-first (last writer on top), then the preview ghost unless a
/// gesture is in progress. No dirty tracking; a repaint is requested every
/// frame so the loop keeps running even without input.
pub struct Renderer {
    ctx: egui::Context,
    background: Color32,
}

impl Renderer {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            ctx: cc.egui_ctx.clone(),
            background: Color32::WHITE,
        }
    }

    /// Renders the current frame
    pub fn render(&self, painter: &egui::Painter, rect: egui::Rect, sketch: &SketchContext) {
        painter.rect_filled(rect, 0.0, self.background);

        for element in sketch.history.committed() {
            element.draw(painter);
        }

        // Preview is suppressed while an entity is actively being drawn
        if !sketch.history.is_drawing() {
            if let Some(preview) = sketch.preview.current() {
                preview.draw(painter);
            }
        }

        // Continuous redraw; change notifications only add responsiveness
        self.ctx.request_repaint();
    }
}
