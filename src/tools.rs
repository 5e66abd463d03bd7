use egui::Color32;
use serde::{Deserialize, Serialize};

/// Brush widths offered by the toolbar dropdown
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BrushSize {
    #[default]
    One,
    Two,
    Five,
    Ten,
}

impl BrushSize {
    pub const ALL: [BrushSize; 4] = [Self::One, Self::Two, Self::Five, Self::Ten];

    pub fn pixels(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    pub fn width(self) -> f32 {
        self.pixels() as f32
    }
}

fn opaque(color: Color32) -> Color32 {
    Color32::from_rgb(color.r(), color.g(), color.b())
}

/// Pen settings used by painting and text stamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pen_color: Color32,
    brush_size: BrushSize,
    // Pen color in use before the eraser was picked
    previous_color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Color32::BLACK, BrushSize::One)
    }
}

impl ToolState {
    pub fn new(pen_color: Color32, brush_size: BrushSize) -> Self {
        Self {
            pen_color,
            brush_size,
            previous_color: pen_color,
        }
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.pen_color = opaque(color);
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.brush_size = size;
    }

    pub fn previous_color(&self) -> Color32 {
        self.previous_color
    }

    /// Remember the pen color and switch to painting with `background`
    pub fn use_eraser(&mut self, background: Color32) {
        self.previous_color = self.pen_color;
        self.pen_color = opaque(background);
    }
}
