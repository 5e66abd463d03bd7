use egui::{Context, Key, KeyboardShortcut, Modifiers, Pos2, Rect, Response};

use crate::command::Command;

pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const CHOOSE_COLOR_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::C);

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas origin, in bitmap pixels
    pub canvas_position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Input the drawing window reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved while the primary button is held
    PrimaryDrag { location: InputLocation },
    /// Primary button released after a drag
    PrimaryRelease,
    /// Secondary button clicked (dropper)
    SecondaryClick { location: InputLocation },
    SaveShortcut,
    ChooseColorShortcut,
}

impl InputEvent {
    /// The document command for this event, if it maps to one directly.
    ///
    /// Shortcuts open dialogs instead and return `None`, as does a dropper
    /// click that landed off the canvas.
    pub fn to_command(&self) -> Option<Command> {
        match self {
            Self::PrimaryDrag { location } => Some(Command::Paint {
                pos: location.canvas_position,
            }),
            Self::PrimaryRelease => Some(Command::ResetStroke),
            Self::SecondaryClick { location } if location.is_in_canvas => Some(Command::PickColor {
                x: location.canvas_position.x.floor() as i32,
                y: location.canvas_position.y.floor() as i32,
            }),
            Self::SecondaryClick { .. } => None,
            Self::SaveShortcut | Self::ChooseColorShortcut => None,
        }
    }
}

/// Handles converting raw egui input into [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_drag_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_drag_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. after a resize or scroll)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            canvas_position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Pointer events on the canvas widget.
    ///
    /// Painting follows the primary button from the frame it goes down on the
    /// canvas, without waiting for egui's drag threshold, so the first point
    /// of a stroke is where the press happened. A drag only produces an event
    /// when the pointer actually moved since the last one.
    pub fn process_canvas(&mut self, response: &Response) -> Vec<InputEvent> {
        self.set_canvas_rect(response.rect);
        let mut events = Vec::new();

        let primary_down = response.ctx.input(|i| i.pointer.primary_down());
        if response.is_pointer_button_down_on() && primary_down {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.last_drag_pos != Some(pos) {
                    events.push(InputEvent::PrimaryDrag {
                        location: self.make_location(pos),
                    });
                    self.last_drag_pos = Some(pos);
                }
            }
        } else if self.last_drag_pos.take().is_some() {
            events.push(InputEvent::PrimaryRelease);
        }

        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(InputEvent::SecondaryClick {
                    location: self.make_location(pos),
                });
            }
        }

        events
    }

    /// Keyboard shortcuts, consumed so other widgets do not see them
    pub fn process_shortcuts(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_shortcut(&SAVE_SHORTCUT) {
                events.push(InputEvent::SaveShortcut);
            }
            if input.consume_shortcut(&CHOOSE_COLOR_SHORTCUT) {
                events.push(InputEvent::ChooseColorShortcut);
            }
        });
        events
    }
}
