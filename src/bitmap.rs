use std::path::Path;

use egui::{Color32, ColorImage, Pos2};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::ExportError;

pub fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

pub fn from_rgb(pixel: Rgb<u8>) -> Color32 {
    Color32::from_rgb(pixel[0], pixel[1], pixel[2])
}

/// Format a color the way the toolbar and logs show it, e.g. `#1a2b3c`
pub fn hex_string(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

const CENTRE_NUDGE: f32 = 1.0 / 1024.0;

/// In-memory RGB raster backing the canvas.
///
/// This is the only place strokes and text end up. The on-screen canvas is a
/// texture re-uploaded from it, and PNG export encodes it directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    pixels: RgbImage,
}

impl Bitmap {
    /// Allocate a bitmap with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: Color32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, to_rgb(color)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    /// Color at `(x, y)`, or `None` outside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|p| from_rgb(*p))
    }

    pub fn image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Rasterize a segment with round caps.
    ///
    /// Pixel `(x, y)` covers the square `[x, x + 1) x [y, y + 1)` and is
    /// painted when its centre lies within half the width of the segment, so
    /// a horizontal line is exactly `width` rows thick. Anything off the
    /// raster is clipped.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let radius = width / 2.0;
        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;

        let x0 = (from.x.min(to.x) - radius).floor().max(0.0);
        let x1 = (from.x.max(to.x) + radius).ceil().min(max_x);
        let y0 = (from.y.min(to.y) - radius).floor().max(0.0);
        let y1 = (from.y.max(to.y) + radius).ceil().min(max_y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let rgb = to_rgb(color);
        for y in y0 as u32..=y1 as u32 {
            for x in x0 as u32..=x1 as u32 {
                // Centres exactly on the edge belong to the pixel after it.
                let centre = Pos2::new(
                    x as f32 + 0.5 - CENTRE_NUDGE,
                    y as f32 + 0.5 - CENTRE_NUDGE,
                );
                if distance_to_segment(centre, from, to) < radius {
                    self.pixels.put_pixel(x, y, rgb);
                }
            }
        }
    }

    /// Mix `color` into the pixel at `(x, y)` by `coverage` in `0.0..=1.0`
    pub fn blend(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || coverage <= 0.0 {
            return;
        }
        let Some(pixel) = self.pixels.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        let alpha = coverage.min(1.0);
        for (dst, src) in pixel.0.iter_mut().zip([color.r(), color.g(), color.b()]) {
            *dst = (f32::from(src) * alpha + f32::from(*dst) * (1.0 - alpha)).round() as u8;
        }
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ExportError> {
        self.pixels.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::BrushSize;

    fn white(width: u32, height: u32) -> Bitmap {
        Bitmap::filled(width, height, Color32::WHITE)
    }

    #[test]
    fn test_filled_bitmap() {
        let bitmap = Bitmap::filled(4, 3, Color32::from_rgb(1, 2, 3));
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 3);
        assert_eq!(bitmap.pixel(3, 2), Some(Color32::from_rgb(1, 2, 3)));
        assert_eq!(bitmap.pixel(4, 0), None);
    }

    #[test]
    fn test_thin_segment_covers_its_pixels_only() {
        let mut bitmap = white(32, 32);
        bitmap.draw_segment(Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0), 1.0, Color32::BLACK);

        for x in 10..20 {
            assert_eq!(bitmap.pixel(x, 10), Some(Color32::BLACK));
        }
        assert_eq!(bitmap.pixel(9, 10), Some(Color32::WHITE));
        assert_eq!(bitmap.pixel(21, 10), Some(Color32::WHITE));
        assert_eq!(bitmap.pixel(15, 9), Some(Color32::WHITE));
        assert_eq!(bitmap.pixel(15, 11), Some(Color32::WHITE));
    }

    fn painted_rows(bitmap: &Bitmap, column: u32) -> Vec<u32> {
        (0..bitmap.height())
            .filter(|&y| bitmap.pixel(column, y) != Some(Color32::WHITE))
            .collect()
    }

    #[test]
    fn test_line_thickness_matches_brush_presets() {
        for size in BrushSize::ALL {
            let mut bitmap = white(40, 40);
            bitmap.draw_segment(Pos2::new(5.0, 20.0), Pos2::new(35.0, 20.0), size.width(), Color32::BLACK);

            let rows = painted_rows(&bitmap, 20);
            let half = size.pixels() / 2;
            let expected: Vec<u32> = (20 - half..20 - half + size.pixels()).collect();
            assert_eq!(rows, expected, "brush {}", size.pixels());
        }
    }

    #[test]
    fn test_fractional_position_paints_the_containing_row() {
        for y in [20.0, 20.5, 20.7, 20.99] {
            let mut bitmap = white(40, 40);
            bitmap.draw_segment(Pos2::new(5.0, y), Pos2::new(35.0, y), 1.0, Color32::BLACK);
            assert_eq!(painted_rows(&bitmap, 20), vec![20], "y = {y}");
        }
    }

    #[test]
    fn test_wide_segment_has_round_caps() {
        let mut bitmap = white(40, 40);
        bitmap.draw_segment(Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0), 10.0, Color32::RED);

        assert_eq!(bitmap.pixel(15, 5), Some(Color32::RED));
        assert_eq!(bitmap.pixel(15, 14), Some(Color32::RED));
        assert_eq!(bitmap.pixel(15, 4), Some(Color32::WHITE));
        assert_eq!(bitmap.pixel(15, 15), Some(Color32::WHITE));
        assert_eq!(bitmap.pixel(5, 10), Some(Color32::RED));
        assert_eq!(bitmap.pixel(4, 10), Some(Color32::WHITE));
        // A square cap would cover this corner.
        assert_eq!(bitmap.pixel(6, 14), Some(Color32::WHITE));
    }

    #[test]
    fn test_segment_is_clipped_to_raster() {
        let mut bitmap = white(10, 10);
        bitmap.draw_segment(Pos2::new(-5.0, 5.0), Pos2::new(50.0, 5.0), 2.0, Color32::BLUE);
        assert_eq!(bitmap.pixel(0, 5), Some(Color32::BLUE));
        assert_eq!(bitmap.pixel(9, 5), Some(Color32::BLUE));

        let before = bitmap.clone();
        bitmap.draw_segment(Pos2::new(-30.0, -30.0), Pos2::new(-20.0, -10.0), 5.0, Color32::BLUE);
        assert_eq!(bitmap, before);
    }

    #[test]
    fn test_blend_mixes_by_coverage() {
        let mut bitmap = white(2, 2);
        bitmap.blend(0, 0, Color32::BLACK, 1.0);
        bitmap.blend(1, 0, Color32::BLACK, 0.5);
        bitmap.blend(-1, 0, Color32::BLACK, 1.0);

        assert_eq!(bitmap.pixel(0, 0), Some(Color32::BLACK));
        assert_eq!(bitmap.pixel(1, 0), Some(Color32::from_rgb(128, 128, 128)));
        assert_eq!(bitmap.pixel(0, 1), Some(Color32::WHITE));
    }

    #[test]
    fn test_color_image_matches_pixels() {
        let mut bitmap = white(3, 2);
        bitmap.draw_segment(Pos2::new(1.5, 1.5), Pos2::new(1.5, 1.5), 1.0, Color32::GREEN);
        let color_image = bitmap.to_color_image();
        assert_eq!(color_image.size, [3, 2]);
        assert_eq!(color_image.pixels[4], Color32::GREEN);
        assert_eq!(color_image.pixels[0], Color32::WHITE);
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(Color32::from_rgb(0x1a, 0x2b, 0x3c)), "#1a2b3c");
    }
}
