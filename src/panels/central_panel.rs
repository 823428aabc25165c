use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input before painting so this frame reflects it
        app.handle_input(ctx, canvas_rect);

        app.render_canvas(&painter, canvas_rect);
    });
}
