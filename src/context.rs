use egui::Color32;

use crate::event::{EventBus, SketchEvent};
use crate::history::EditHistory;
use crate::preview::PreviewController;
use crate::tool::ToolState;

/// Owned context for the sketch engine: the edit history, the preview
/// controller, the tool configuration, and the event bus.
///
/// This is the single mutation surface the UI layer talks to. All methods
/// run synchronously on the UI thread; the engine has no other writers.
#[derive(Debug, Default)]
pub struct SketchContext {
    pub history: EditHistory,
    pub preview: PreviewController,
    pub tools: ToolState,
    pub bus: EventBus,
}

impl SketchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the marker tool
    pub fn select_marker(&mut self) {
        self.tools.select_marker();
        self.preview.on_tool_changed();
        log::info!("tool selected: marker");
        self.bus.emit(SketchEvent::ToolChanged);
    }

    /// Select a stamp tool for the given glyph
    pub fn select_stamp(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        log::info!("tool selected: stamp {glyph}");
        self.tools.select_stamp(glyph);
        self.preview.on_tool_changed();
        self.bus.emit(SketchEvent::ToolChanged);
    }

    /// Set the marker thickness in whole pixels
    pub fn set_thickness(&mut self, pixels: u32) {
        self.tools.set_thickness(pixels);
        self.bus.emit(SketchEvent::ToolChanged);
    }

    /// Set the marker color
    pub fn set_color(&mut self, color: Color32) {
        self.tools.set_color(color);
        self.bus.emit(SketchEvent::ToolChanged);
    }

    /// Undo the most recent committed entity, if any
    pub fn undo(&mut self) {
        if self.history.undo() {
            self.bus.emit(SketchEvent::DrawingChanged);
        }
    }

    /// Redo the most recently undone entity, if any
    pub fn redo(&mut self) {
        if self.history.redo() {
            self.bus.emit(SketchEvent::DrawingChanged);
        }
    }

    /// Drop all committed and undone entities
    pub fn clear_all(&mut self) {
        self.history.clear_all();
        self.bus.emit(SketchEvent::DrawingChanged);
    }
}
