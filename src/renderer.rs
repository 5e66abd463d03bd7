use egui::{Color32, ColorImage, Rect, Sense, TextureHandle, TextureId, TextureOptions};

use crate::document::Document;

/// Keeps the on-screen canvas texture in step with the document bitmap.
///
/// The texture is only re-uploaded when the document revision moves.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    synced_revision: Option<u64>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("synced_revision", &self.synced_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image shown on screen for `document`
    pub fn color_image(document: &Document) -> ColorImage {
        document.bitmap().to_color_image()
    }

    pub fn needs_upload(&self, document: &Document) -> bool {
        self.texture.is_none() || self.synced_revision != Some(document.revision())
    }

    /// Upload the bitmap if it changed since the last frame
    pub fn sync(&mut self, ctx: &egui::Context, document: &Document) -> TextureId {
        let needs_upload = self.needs_upload(document);
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if needs_upload {
                    texture.set(Self::color_image(document), TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("canvas", Self::color_image(document), TextureOptions::NEAREST),
        };
        if needs_upload {
            log::debug!(
                "Uploaded canvas texture {}x{} (revision {})",
                document.width(),
                document.height(),
                document.revision()
            );
        }

        let id = texture.id();
        self.texture = Some(texture);
        self.synced_revision = Some(document.revision());
        id
    }

    /// Draw the canvas at one screen point per bitmap pixel.
    ///
    /// The returned response senses drags and clicks for painting and the dropper.
    pub fn render(&mut self, ui: &mut egui::Ui, document: &Document) -> egui::Response {
        let texture_id = self.sync(ui.ctx(), document);
        let size = egui::vec2(document.width() as f32, document.height() as f32);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        ui.painter().image(
            texture_id,
            rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
        response
    }
}
