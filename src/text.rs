use std::borrow::Cow;
use std::sync::OnceLock;

use ab_glyph::{point, Font, FontArc, FontRef, FontVec, ScaleFont};
use egui::{Color32, FontFamily, FontTweak, Pos2};

use crate::bitmap::Bitmap;

/// Pixel height used when stamping text onto the canvas
pub const TEXT_SIZE: f32 = 16.0;

/// The proportional font egui embeds, loaded for rasterizing into a [`Bitmap`]
pub struct TextFont {
    font: FontArc,
    tweak: FontTweak,
}

static DEFAULT_FONT: OnceLock<Option<TextFont>> = OnceLock::new();

impl TextFont {
    /// Shared instance of egui's default proportional font.
    ///
    /// Returns `None` if egui was built without its default fonts.
    pub fn default_font() -> Option<&'static TextFont> {
        DEFAULT_FONT.get_or_init(Self::load_default).as_ref()
    }

    fn load_default() -> Option<TextFont> {
        let definitions = egui::FontDefinitions::default();
        let family = definitions.families.get(&FontFamily::Proportional)?;
        let name = family.first()?;
        let data = definitions.font_data.get(name)?;

        let font = match &data.font {
            Cow::Borrowed(bytes) => FontRef::try_from_slice_and_index(*bytes, data.index)
                .map(FontArc::from)
                .ok(),
            Cow::Owned(bytes) => FontVec::try_from_vec_and_index(bytes.clone(), data.index)
                .map(FontArc::from)
                .ok(),
        };
        if font.is_none() {
            log::warn!("Could not parse embedded font {name}, text stamping disabled");
        }

        Some(TextFont {
            font: font?,
            tweak: data.tweak,
        })
    }

    /// Draw `text` with its line box's top-left corner at `pos`.
    ///
    /// Glyph coverage is blended into the existing pixels. `\n` starts a new
    /// line under the first one.
    pub fn stamp(&self, bitmap: &mut Bitmap, pos: Pos2, text: &str, color: Color32, size: f32) {
        let scaled = self.font.as_scaled(size * self.tweak.scale);
        let line_height = scaled.height() + scaled.line_gap();
        let baseline = pos.y + scaled.ascent() + self.tweak.y_offset_factor * size + self.tweak.y_offset;
        let mut caret = point(pos.x, baseline);

        for ch in text.chars() {
            if ch == '\n' {
                caret = point(pos.x, caret.y + line_height);
                continue;
            }
            if ch.is_control() {
                continue;
            }

            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = caret;
            caret.x += scaled.h_advance(glyph.id);

            if let Some(outlined) = scaled.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|x, y, coverage| {
                    bitmap.blend(
                        bounds.min.x as i32 + x as i32,
                        bounds.min.y as i32 + y as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}
