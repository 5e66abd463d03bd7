use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};

use crate::bitmap::{hex_string, Bitmap};
use crate::error::{CanvasError, ExportError};
use crate::export::export_png;
use crate::settings::{rgb_triple, Settings};
use crate::stroke::{Segment, StrokeCursor};
use crate::text::{TextFont, TEXT_SIZE};
use crate::tools::{BrushSize, ToolState};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const MIN_WIDTH: u32 = 100;
pub const MAX_WIDTH: u32 = 1500;
pub const MIN_HEIGHT: u32 = 100;
pub const MAX_HEIGHT: u32 = 1000;

/// The drawing being edited: bitmap, background, pen and the stroke cursor.
///
/// Every controller operation lives here and runs synchronously. The bitmap
/// is the single source of truth; the visible canvas is re-rendered from it
/// whenever [`Document::revision`] changes.
#[derive(Debug, Clone)]
pub struct Document {
    bitmap: Bitmap,
    background: Color32,
    tools: ToolState,
    cursor: StrokeCursor,
    revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color32::WHITE, ToolState::default())
    }
}

impl Document {
    pub fn new(width: u32, height: u32, background: Color32, tools: ToolState) -> Self {
        Self {
            bitmap: Bitmap::filled(width, height, background),
            background,
            tools,
            cursor: StrokeCursor::default(),
            revision: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        Self::new(
            settings.canvas_width,
            settings.canvas_height,
            settings.background(),
            ToolState::new(settings.pen_color(), settings.brush_size),
        )
    }

    /// Snapshot of the state worth restoring next session
    pub fn settings(&self) -> Settings {
        Settings {
            pen_color: rgb_triple(self.tools.pen_color()),
            brush_size: self.tools.brush_size(),
            background: rgb_triple(self.background),
            canvas_width: self.width(),
            canvas_height: self.height(),
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn pen_color(&self) -> Color32 {
        self.tools.pen_color()
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn cursor(&self) -> &StrokeCursor {
        &self.cursor
    }

    /// Bumped on every bitmap change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn replace_bitmap(&mut self, width: u32, height: u32, fill: Color32) {
        self.bitmap = Bitmap::filled(width, height, fill);
        self.touch();
    }

    /// Extend the current stroke to `pos`.
    ///
    /// Returns the segment drawn, or `None` on the first event of a stroke.
    pub fn paint(&mut self, pos: Pos2) -> Option<Segment> {
        let from = self.cursor.advance(pos)?;
        let segment = Segment {
            from,
            to: pos,
            color: self.tools.pen_color(),
            width: self.tools.brush_size().width(),
        };
        self.bitmap
            .draw_segment(segment.from, segment.to, segment.width, segment.color);
        self.touch();
        Some(segment)
    }

    pub fn reset_stroke(&mut self) {
        self.cursor.reset();
    }

    pub fn clear_canvas(&mut self) {
        self.replace_bitmap(self.width(), self.height(), self.background);
    }

    pub fn choose_color(&mut self, color: Color32) {
        self.tools.set_pen_color(color);
    }

    pub fn use_eraser(&mut self) {
        self.tools.use_eraser(self.background);
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.tools.set_brush_size(size);
    }

    /// Dropper: adopt the bitmap color at `(x, y)` as the pen color.
    ///
    /// Returns the picked color, or `None` when the point is off the canvas.
    pub fn pick_color(&mut self, x: i32, y: i32) -> Option<Color32> {
        if !self.bitmap.contains(i64::from(x), i64::from(y)) {
            return None;
        }
        let color = self.bitmap.pixel(x as u32, y as u32)?;
        self.tools.set_pen_color(color);
        log::debug!("Picked color {}", hex_string(color));
        Some(color)
    }

    /// Start over on a bitmap filled with `color`
    pub fn change_background_color(&mut self, color: Color32) {
        self.background = Color32::from_rgb(color.r(), color.g(), color.b());
        self.replace_bitmap(self.width(), self.height(), self.background);
    }

    /// Stamp `text` in the pen color with its top-left at `(x, y)`.
    ///
    /// Returns `false` if nothing could be drawn.
    pub fn add_text(&mut self, text: &str, x: i32, y: i32) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(font) = TextFont::default_font() else {
            log::warn!("No font available, text not added");
            return false;
        };
        let pos = Pos2::new(x as f32, y as f32);
        font.stamp(&mut self.bitmap, pos, text, self.tools.pen_color(), TEXT_SIZE);
        self.touch();
        true
    }

    /// Resize to `width` x `height`, discarding the drawing.
    ///
    /// The new bitmap and the background are white.
    pub fn change_canvas_size(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) || !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height)
        {
            return Err(CanvasError::SizeOutOfBounds { width, height });
        }
        self.background = Color32::WHITE;
        self.replace_bitmap(width, height, Color32::WHITE);
        Ok(())
    }

    /// Write the bitmap to `path` as PNG, returning the final path
    pub fn save_image(&self, path: &Path) -> Result<PathBuf, ExportError> {
        export_png(&self.bitmap, path)
    }
}
