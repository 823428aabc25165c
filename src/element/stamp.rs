use egui::{Align2, Color32, FontId, Painter, Pos2, Rect};

use super::{Draggable, Element};
use crate::element::common::STAMP_GLYPH_SIZE;

/// Decorative glyph placed at a point, drawn at a fixed size regardless of
/// the marker thickness. Dragging while the placing gesture is still held
/// repositions it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pos: Pos2,
    glyph: String,
}

impl Stamp {
    pub fn new(pos: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            pos,
            glyph: glyph.into(),
        }
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Element for Stamp {
    fn element_type(&self) -> &'static str {
        "stamp"
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, egui::vec2(STAMP_GLYPH_SIZE, STAMP_GLYPH_SIZE))
    }

    fn draw(&self, painter: &Painter) {
        painter.text(
            self.pos,
            Align2::CENTER_CENTER,
            &self.glyph,
            FontId::proportional(STAMP_GLYPH_SIZE),
            Color32::BLACK,
        );
    }
}

impl Draggable for Stamp {
    /// Repositions the stamp to the drag position
    fn drag(&mut self, pos: Pos2) {
        self.pos = pos;
    }
}
