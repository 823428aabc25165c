use egui::{Painter, Pos2, Rect};

// Re-export concrete implementations
mod common;
pub(crate) mod stamp;
pub(crate) mod stroke;

pub use common::STAMP_GLYPH_SIZE;
pub(crate) use common::distance_to_line_segment;
pub use stamp::Stamp;
pub use stroke::Stroke;

/// Common trait that all drawable entities must implement
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;

    /// Draw the element using the provided painter
    fn draw(&self, painter: &Painter);
}

/// Optional capability: an element that can be mutated by pointer drags
/// while it is the active entity of a gesture.
///
/// What a drag means is up to the variant: a stroke extends its path, a
/// stamp moves to the new position. Entities that don't implement this are
/// silently skipped on the pointer-move path.
pub trait Draggable {
    fn drag(&mut self, pos: Pos2);
}

/// Enumeration of all committed entity types
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(stroke::Stroke),
    Stamp(stamp::Stamp),
}

impl ElementType {
    /// Type-safe capability query for the drag capability.
    ///
    /// Returns `None` for variants that cannot be dragged; callers must
    /// treat that as a no-op rather than an error.
    pub fn as_draggable(&mut self) -> Option<&mut dyn Draggable> {
        match self {
            ElementType::Stroke(s) => Some(s),
            ElementType::Stamp(s) => Some(s),
        }
    }
}

impl Element for ElementType {
    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(_) => "stroke",
            ElementType::Stamp(_) => "stamp",
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Stroke(s) => s.rect(),
            ElementType::Stamp(s) => s.rect(),
        }
    }

    fn draw(&self, painter: &Painter) {
        match self {
            ElementType::Stroke(s) => s.draw(painter),
            ElementType::Stamp(s) => s.draw(painter),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a new stroke element seeded with its first point
    pub fn create_stroke(origin: Pos2, thickness: f32, color: Color32) -> ElementType {
        ElementType::Stroke(stroke::Stroke::new(origin, thickness, color))
    }

    /// Create a new stamp element
    pub fn create_stamp(pos: Pos2, glyph: impl Into<String>) -> ElementType {
        ElementType::Stamp(stamp::Stamp::new(pos, glyph))
    }
}
