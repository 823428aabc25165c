use egui::{Align2, Color32, FontId, Painter, Pos2};

use crate::element::STAMP_GLYPH_SIZE;
use crate::tool::{Tool, ToolState};

const PREVIEW_ALPHA: f32 = 0.6;

/// The transient "what will happen next" ghost shown under the hovering
/// pointer. Never part of the edit history; at most one instance exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Marker preview: a translucent dot sized by the current thickness
    Circle {
        pos: Pos2,
        thickness: f32,
        color: Color32,
    },
    /// Stamp preview: the glyph itself, translucent
    Glyph { pos: Pos2, glyph: String },
}

impl Preview {
    fn for_tool(pos: Pos2, tools: &ToolState) -> Self {
        match tools.tool() {
            Tool::Marker => Preview::Circle {
                pos,
                thickness: tools.thickness(),
                color: tools.color(),
            },
            Tool::Stamp(glyph) => Preview::Glyph {
                pos,
                glyph: glyph.clone(),
            },
        }
    }

    /// True if this preview variant matches the given tool
    fn matches(&self, tool: &Tool) -> bool {
        matches!(
            (self, tool),
            (Preview::Circle { .. }, Tool::Marker) | (Preview::Glyph { .. }, Tool::Stamp(_))
        )
    }

    pub fn pos(&self) -> Pos2 {
        match self {
            Preview::Circle { pos, .. } | Preview::Glyph { pos, .. } => *pos,
        }
    }

    pub fn draw(&self, painter: &Painter) {
        match self {
            Preview::Circle {
                pos,
                thickness,
                color,
            } => {
                let radius = (thickness / 2.0).max(1.0);
                painter.circle_filled(*pos, radius, color.gamma_multiply(PREVIEW_ALPHA));
            }
            Preview::Glyph { pos, glyph } => {
                painter.text(
                    *pos,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(STAMP_GLYPH_SIZE),
                    Color32::BLACK.gamma_multiply(PREVIEW_ALPHA),
                );
            }
        }
    }
}

/// Maintains the single live preview ghost.
///
/// The controller only tracks the ghost; suppressing it while a gesture is
/// in progress is the render loop's job.
#[derive(Debug, Default)]
pub struct PreviewController {
    preview: Option<Preview>,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the canvas: create the ghost for the current tool
    pub fn on_pointer_enter(&mut self, pos: Pos2, tools: &ToolState) {
        self.preview = Some(Preview::for_tool(pos, tools));
    }

    /// Pointer moved while hovering: update the ghost in place, or replace
    /// it when the tool type no longer matches the live variant.
    pub fn on_pointer_move(&mut self, pos: Pos2, tools: &ToolState) {
        match &mut self.preview {
            Some(preview) if preview.matches(tools.tool()) => match preview {
                Preview::Circle {
                    pos: p, thickness, ..
                } => {
                    *p = pos;
                    *thickness = tools.thickness();
                }
                Preview::Glyph { pos: p, glyph } => {
                    *p = pos;
                    if let Tool::Stamp(current) = tools.tool() {
                        if glyph != current {
                            glyph.clone_from(current);
                        }
                    }
                }
            },
            _ => self.preview = Some(Preview::for_tool(pos, tools)),
        }

        // keep color live for the circle variant
        if let Some(Preview::Circle { color, .. }) = &mut self.preview {
            *color = tools.color();
        }
    }

    /// Pointer left the canvas: no preview while off-surface
    pub fn on_pointer_leave(&mut self) {
        self.preview = None;
    }

    /// Tool changed: discard so the next move recreates the right variant
    pub fn on_tool_changed(&mut self) {
        self.preview = None;
    }

    pub fn current(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }
}
