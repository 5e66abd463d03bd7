use egui::Color32;

use crate::command::Command;
use crate::document::Document;

/// Which color the picker dialog edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Pen,
    Background,
}

/// The modal prompt currently open, if any.
///
/// While a prompt is open the canvas ignores pointer input. Confirming turns
/// the prompt into a [`Command`], cancelling drops it without touching the
/// document.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    ChoosingColor {
        target: ColorTarget,
        color: Color32,
    },
    EnteringText {
        text: String,
        x: i32,
        y: i32,
    },
    Resizing {
        width: u32,
        height: u32,
    },
    Notice {
        title: String,
        message: String,
    },
}

impl EditorState {
    pub fn choose_color(target: ColorTarget, document: &Document) -> Self {
        let color = match target {
            ColorTarget::Pen => document.pen_color(),
            ColorTarget::Background => document.background(),
        };
        Self::ChoosingColor { target, color }
    }

    pub fn enter_text() -> Self {
        Self::EnteringText {
            text: String::new(),
            x: 0,
            y: 0,
        }
    }

    pub fn resize(document: &Document) -> Self {
        Self::Resizing {
            width: document.width(),
            height: document.height(),
        }
    }

    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_modal(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Close the prompt and return the command it asked for
    pub fn confirm(&mut self) -> Option<Command> {
        let command = match std::mem::take(self) {
            Self::Idle | Self::Notice { .. } => None,
            Self::ChoosingColor { target: ColorTarget::Pen, color } => {
                Some(Command::SetPenColor(color))
            }
            Self::ChoosingColor { target: ColorTarget::Background, color } => {
                Some(Command::ChangeBackground(color))
            }
            Self::EnteringText { text, x, y } => {
                (!text.is_empty()).then_some(Command::AddText { text, x, y })
            }
            Self::Resizing { width, height } => Some(Command::ResizeCanvas { width, height }),
        };
        if let Some(command) = &command {
            log::debug!("Dialog confirmed: {}", command.name());
        }
        command
    }

    pub fn cancel(&mut self) {
        if self.is_modal() {
            log::debug!("Dialog cancelled");
        }
        *self = Self::Idle;
    }
}
