use egui::Color32;

pub const DEFAULT_THICKNESS: u32 = 4;

/// The currently selected drawing tool.
///
/// Stamp glyphs are an open set: the UI can register new glyphs at runtime,
/// so the variant carries the glyph itself rather than an index.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker,
    Stamp(String),
}

/// Process-wide tool and configuration state.
///
/// Mutated only by UI selection events; never part of the edit history.
/// Thickness is remembered across a switch to a stamp tool and back, so
/// re-selecting the marker restores the last marker thickness.
#[derive(Debug, Clone)]
pub struct ToolState {
    tool: Tool,
    thickness: f32,
    last_thickness: f32,
    color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Marker,
            thickness: DEFAULT_THICKNESS as f32,
            last_thickness: DEFAULT_THICKNESS as f32,
            color: Color32::BLACK,
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Select the marker, restoring the remembered thickness
    pub fn select_marker(&mut self) {
        self.tool = Tool::Marker;
        self.thickness = self.last_thickness;
    }

    /// Select a stamp tool for the given glyph
    pub fn select_stamp(&mut self, glyph: impl Into<String>) {
        self.tool = Tool::Stamp(glyph.into());
    }

    /// Set the marker thickness in whole pixels (minimum 1)
    pub fn set_thickness(&mut self, pixels: u32) {
        let thickness = pixels.max(1) as f32;
        self.thickness = thickness;
        self.last_thickness = thickness;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }
}
