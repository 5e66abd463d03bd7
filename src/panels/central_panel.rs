use crate::DrawingApp;

pub fn central_panel(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let (renderer, document) = app.renderer_and_document();
                let response = renderer.render(ui, document);

                // Prompts are modal: the canvas stays visible but inert
                if app.state().is_modal() {
                    return;
                }
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
                }

                let events = app.input_handler_mut().process_canvas(&response);
                for event in events {
                    app.handle_input_event(event);
                }
            });
    });
}
