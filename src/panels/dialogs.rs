use egui::color_picker::{color_picker_color32, Alpha};
use egui::{Align2, DragValue, Key};

use crate::command::Command;
use crate::document::{Document, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::state::{ColorTarget, EditorState};

fn title(state: &EditorState) -> Option<String> {
    let title = match state {
        EditorState::Idle => return None,
        EditorState::ChoosingColor { target: ColorTarget::Pen, .. } => "Choose Color",
        EditorState::ChoosingColor { target: ColorTarget::Background, .. } => "Background Color",
        EditorState::EnteringText { .. } => "Add Text",
        EditorState::Resizing { .. } => "Canvas Size",
        EditorState::Notice { title, .. } => title.as_str(),
    };
    Some(title.to_owned())
}

/// Show the open prompt, if any.
///
/// Returns the command to run when the user confirms. Cancel and Escape
/// close the prompt without producing anything.
pub fn show(ctx: &egui::Context, state: &mut EditorState, document: &Document) -> Option<Command> {
    let title = title(state)?;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match state {
                EditorState::ChoosingColor { color, .. } => {
                    color_picker_color32(ui, color, Alpha::Opaque);
                }
                EditorState::EnteringText { text, x, y } => {
                    ui.horizontal(|ui| {
                        ui.label("Text:");
                        ui.text_edit_singleline(text);
                    });
                    let max_x = document.width().saturating_sub(1) as i32;
                    let max_y = document.height().saturating_sub(1) as i32;
                    ui.horizontal(|ui| {
                        ui.label("X:");
                        ui.add(DragValue::new(x).range(0..=max_x));
                        ui.label("Y:");
                        ui.add(DragValue::new(y).range(0..=max_y));
                    });
                }
                EditorState::Resizing { width, height } => {
                    ui.horizontal(|ui| {
                        ui.label("Width:");
                        ui.add(DragValue::new(width).range(MIN_WIDTH..=MAX_WIDTH).suffix(" px"));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Height:");
                        ui.add(DragValue::new(height).range(MIN_HEIGHT..=MAX_HEIGHT).suffix(" px"));
                    });
                    ui.label("The current drawing will be discarded.");
                }
                EditorState::Notice { message, .. } => {
                    ui.label(message.as_str());
                }
                EditorState::Idle => {}
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
                if !matches!(state, EditorState::Notice { .. }) && ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        cancelled = true;
    }

    if confirmed {
        state.confirm()
    } else {
        if cancelled {
            state.cancel();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_titles() {
        assert_eq!(title(&EditorState::Idle), None);
        assert_eq!(
            title(&EditorState::ChoosingColor {
                target: ColorTarget::Background,
                color: Color32::WHITE
            })
            .as_deref(),
            Some("Background Color")
        );
        assert_eq!(
            title(&EditorState::notice("Information", "Saved")).as_deref(),
            Some("Information")
        );
    }
}
