use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::document::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
use crate::tools::BrushSize;

/// Tool and canvas settings restored between sessions.
///
/// Colors are stored as plain RGB triples so the persisted form does not
/// depend on egui's serde support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub pen_color: [u8; 3],
    pub brush_size: BrushSize,
    pub background: [u8; 3],
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pen_color: [0, 0, 0],
            brush_size: BrushSize::One,
            background: [255, 255, 255],
            canvas_width: DEFAULT_WIDTH,
            canvas_height: DEFAULT_HEIGHT,
        }
    }
}

impl Settings {
    /// Clamp the canvas size into the range the resize dialog allows
    pub fn sanitized(mut self) -> Self {
        self.canvas_width = self.canvas_width.clamp(MIN_WIDTH, MAX_WIDTH);
        self.canvas_height = self.canvas_height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        self
    }

    pub fn pen_color(&self) -> Color32 {
        let [r, g, b] = self.pen_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn background(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}

pub fn rgb_triple(color: Color32) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings {
            pen_color: [10, 20, 30],
            brush_size: BrushSize::Ten,
            background: [1, 2, 3],
            canvas_width: 800,
            canvas_height: 300,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
        assert_eq!(restored.pen_color(), Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let restored: Settings = serde_json::from_str(r#"{"brush_size":"Five"}"#).unwrap();
        assert_eq!(restored.brush_size, BrushSize::Five);
        assert_eq!(restored.canvas_width, DEFAULT_WIDTH);
        assert_eq!(restored.background(), Color32::WHITE);
    }

    #[test]
    fn test_sanitized_clamps_canvas_size() {
        let settings = Settings {
            canvas_width: 5000,
            canvas_height: 10,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.canvas_width, MAX_WIDTH);
        assert_eq!(settings.canvas_height, MIN_HEIGHT);
    }
}
