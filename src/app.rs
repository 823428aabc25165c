use std::path::Path;

use crate::context::SketchContext;
use crate::export;
use crate::input::{InputHandler, PointerTracker};
use crate::renderer::Renderer;
use crate::tool::DEFAULT_THICKNESS;

/// Scale factor used when exporting the sketch to a bitmap
const EXPORT_SCALE: f32 = 4.0;

/// Default stamp palette; the UI can extend it at runtime
const DEFAULT_STAMPS: [&str; 3] = ["🌟", "🔥", "🎯"];

pub struct SketchApp {
    sketch: SketchContext,
    tracker: PointerTracker,
    input: InputHandler,
    renderer: Renderer,

    stamp_palette: Vec<String>,
    // UI edit buffers, synced into the tool state on change
    pub(crate) thickness: u32,
    pub(crate) color: egui::Color32,
    pub(crate) new_stamp: String,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let sketch = SketchContext::new();

        // Immediate-responsiveness path: any change notification requests a
        // repaint. The render loop repaints continuously anyway.
        let egui_ctx = cc.egui_ctx.clone();
        sketch
            .bus
            .subscribe(Box::new(move |_event: &crate::event::SketchEvent| {
                egui_ctx.request_repaint();
            }));

        Self {
            sketch,
            tracker: PointerTracker::new(),
            input: InputHandler::new(),
            renderer: Renderer::new(cc),
            stamp_palette: DEFAULT_STAMPS.iter().map(|s| s.to_string()).collect(),
            thickness: DEFAULT_THICKNESS,
            color: egui::Color32::BLACK,
            new_stamp: String::new(),
        }
    }

    pub fn sketch(&self) -> &SketchContext {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut SketchContext {
        &mut self.sketch
    }

    pub fn stamp_palette(&self) -> &[String] {
        &self.stamp_palette
    }

    /// Register a new stamp glyph and select it
    pub fn add_stamp(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            return;
        }
        if !self.stamp_palette.contains(&glyph) {
            self.stamp_palette.push(glyph.clone());
        }
        self.sketch.select_stamp(glyph);
    }

    /// Feed this frame's pointer input through the tracker
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.tracker.handle(event, &mut self.sketch);
        }
    }

    /// Composite the sketch onto the canvas painter
    pub fn render_canvas(&self, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(painter, rect, &self.sketch);
    }

    /// Export the committed entities as an upscaled PNG next to the binary
    pub fn export_png(&self) {
        let path = Path::new("sketch-export.png");
        if let Err(err) = export::export_png(self.sketch.history.committed(), path, EXPORT_SCALE) {
            log::error!("export failed: {err}");
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::panels::tools_panel(self, ctx);
        crate::panels::central_panel(self, ctx);
    }
}
