use std::path::PathBuf;

use egui::{Color32, Pos2};

use crate::bitmap::hex_string;
use crate::document::Document;
use crate::error::CommandError;
use crate::tools::BrushSize;

/// Every action the canvas window can perform on the document.
///
/// UI events and dialog results are translated into commands and all of
/// them go through [`Command::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pointer moved with the primary button held, in canvas pixels
    Paint { pos: Pos2 },
    /// Primary button released
    ResetStroke,
    ClearCanvas,
    SetPenColor(Color32),
    UseEraser,
    SetBrushSize(BrushSize),
    /// Dropper at a canvas pixel
    PickColor { x: i32, y: i32 },
    ChangeBackground(Color32),
    AddText { text: String, x: i32, y: i32 },
    ResizeCanvas { width: u32, height: u32 },
    /// Export to the chosen path, `.png` is appended when missing
    SaveImage(PathBuf),
}

/// What executing a command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Applied,
    /// Nothing changed, e.g. the first point of a stroke or a dropper click off the canvas
    Ignored,
    Saved(PathBuf),
}

pub type CommandResult = Result<CommandOutcome, CommandError>;

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paint { .. } => "Paint",
            Self::ResetStroke => "Reset Stroke",
            Self::ClearCanvas => "Clear Canvas",
            Self::SetPenColor(_) => "Set Pen Color",
            Self::UseEraser => "Use Eraser",
            Self::SetBrushSize(_) => "Set Brush Size",
            Self::PickColor { .. } => "Pick Color",
            Self::ChangeBackground(_) => "Change Background",
            Self::AddText { .. } => "Add Text",
            Self::ResizeCanvas { .. } => "Resize Canvas",
            Self::SaveImage(_) => "Save Image",
        }
    }

    /// Pointer commands arrive every frame and are not worth logging
    fn is_pointer_event(&self) -> bool {
        matches!(self, Self::Paint { .. } | Self::ResetStroke)
    }

    pub fn execute(&self, document: &mut Document) -> CommandResult {
        if !self.is_pointer_event() {
            log::info!("Executing command: {}", self.name());
        }

        let applied = match self {
            Self::Paint { pos } => document.paint(*pos).is_some(),
            Self::ResetStroke => {
                document.reset_stroke();
                true
            }
            Self::ClearCanvas => {
                document.clear_canvas();
                true
            }
            Self::SetPenColor(color) => {
                document.choose_color(*color);
                log::info!("Pen color set to {}", hex_string(document.pen_color()));
                true
            }
            Self::UseEraser => {
                document.use_eraser();
                true
            }
            Self::SetBrushSize(size) => {
                document.set_brush_size(*size);
                true
            }
            Self::PickColor { x, y } => match document.pick_color(*x, *y) {
                Some(color) => {
                    log::info!("Dropper picked {} at ({x}, {y})", hex_string(color));
                    true
                }
                None => false,
            },
            Self::ChangeBackground(color) => {
                document.change_background_color(*color);
                true
            }
            Self::AddText { text, x, y } => document.add_text(text, *x, *y),
            Self::ResizeCanvas { width, height } => {
                document.change_canvas_size(*width, *height).inspect_err(|err| {
                    log::warn!("Resize rejected: {err}");
                })?;
                true
            }
            Self::SaveImage(path) => {
                let saved = document.save_image(path).inspect_err(|err| {
                    log::error!("Failed to save {}: {err}", path.display());
                })?;
                return Ok(CommandOutcome::Saved(saved));
            }
        };

        Ok(if applied {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paint_is_ignored() {
        let mut doc = Document::default();
        let first = Command::Paint { pos: Pos2::new(1.0, 1.0) };
        let second = Command::Paint { pos: Pos2::new(4.0, 1.0) };
        assert_eq!(first.execute(&mut doc).unwrap(), CommandOutcome::Ignored);
        assert_eq!(second.execute(&mut doc).unwrap(), CommandOutcome::Applied);
    }

    #[test]
    fn test_pick_off_canvas_is_ignored() {
        let mut doc = Document::default();
        let cmd = Command::PickColor { x: -1, y: 10 };
        assert_eq!(cmd.execute(&mut doc).unwrap(), CommandOutcome::Ignored);
    }

    #[test]
    fn test_resize_error_propagates() {
        let mut doc = Document::default();
        let cmd = Command::ResizeCanvas { width: 2000, height: 500 };
        assert!(matches!(cmd.execute(&mut doc), Err(CommandError::Canvas(_))));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::ClearCanvas.name(), "Clear Canvas");
        assert_eq!(Command::SaveImage(PathBuf::from("x")).name(), "Save Image");
    }
}
