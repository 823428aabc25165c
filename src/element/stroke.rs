use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::{Draggable, Element};
use crate::element::common;

/// Freehand marker stroke: an ordered series of connected points.
///
/// Points are appended in drawing order while the stroke is the active
/// entity of a gesture; color and thickness are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    /// Create a new stroke seeded with its first point
    pub fn new(origin: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Get the stroke color
    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Get the stroke thickness
    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Element for Stroke {
    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn rect(&self) -> Rect {
        // A single click without a drag leaves one point and no visible mark
        if self.points.len() < 2 {
            return Rect::NOTHING;
        }

        common::calculate_bounds(&self.points, self.thickness / 2.0)
    }

    fn draw(&self, painter: &Painter) {
        if self.points.len() < 2 {
            return;
        }

        painter.add(egui::Shape::line(
            self.points.clone(),
            EguiStroke::new(self.thickness, self.color),
        ));
    }
}

impl Draggable for Stroke {
    /// Extends the stroke: each drag position becomes the next point
    fn drag(&mut self, pos: Pos2) {
        self.points.push(pos);
    }
}
