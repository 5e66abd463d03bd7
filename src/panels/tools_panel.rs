use egui::{Color32, Sense};

use crate::bitmap::hex_string;
use crate::command::Command;
use crate::state::{ColorTarget, EditorState};
use crate::tools::BrushSize;
use crate::DrawingApp;

fn color_swatch(ui: &mut egui::Ui, color: Color32, side: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter()
        .rect_stroke(rect, 2.0, ui.visuals().widgets.noninteractive.bg_stroke);
    response
}

pub fn tools_panel(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        let enabled = !app.state().is_modal();
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Clear").clicked() {
                    app.execute_command(Command::ClearCanvas);
                }
                if ui
                    .button("Choose Color")
                    .on_hover_text("Ctrl+Shift+C")
                    .clicked()
                {
                    app.open_color_dialog(ColorTarget::Pen);
                }
                if ui.button("Save").on_hover_text("Ctrl+S").clicked() {
                    app.request_save();
                }
                if ui.button("Eraser").clicked() {
                    app.execute_command(Command::UseEraser);
                }
                if ui.button("Text").clicked() {
                    app.open_dialog(EditorState::enter_text());
                }
                if ui.button("Change Background").clicked() {
                    app.open_color_dialog(ColorTarget::Background);
                }
                if ui.button("Change Size").clicked() {
                    let state = EditorState::resize(app.document());
                    app.open_dialog(state);
                }

                ui.separator();

                let current = app.document().tools().brush_size();
                let mut selected = current;
                egui::ComboBox::from_label("Brush")
                    .selected_text(selected.pixels().to_string())
                    .show_ui(ui, |ui| {
                        for preset in BrushSize::ALL {
                            ui.selectable_value(&mut selected, preset, preset.pixels().to_string());
                        }
                    });
                if selected != current {
                    log::info!("Brush size selected from UI: {}", selected.pixels());
                    app.execute_command(Command::SetBrushSize(selected));
                }

                ui.separator();

                let pen = app.document().pen_color();
                color_swatch(ui, pen, 18.0).on_hover_text("Pen color");
                ui.monospace(hex_string(pen));

                let previous = app.document().tools().previous_color();
                color_swatch(ui, previous, 12.0)
                    .on_hover_text(format!("Color before eraser: {}", hex_string(previous)));
            });
        });
    });
}
