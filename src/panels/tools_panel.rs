use egui::Slider;

use crate::SketchApp;
use crate::tool::Tool;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let is_marker = matches!(app.sketch().tools.tool(), Tool::Marker);
            if ui.selectable_label(is_marker, "✏ Marker").clicked() {
                app.sketch_mut().select_marker();
                // the slider buffer should show the restored thickness
                app.thickness = app.sketch().tools.thickness() as u32;
            }

            ui.horizontal(|ui| {
                ui.label("Thickness:");
                if ui.add(Slider::new(&mut app.thickness, 1..=32)).changed() {
                    let pixels = app.thickness;
                    app.sketch_mut().set_thickness(pixels);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                let changed = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed();
                if changed {
                    let color = app.color;
                    app.sketch_mut().set_color(color);
                }
            });

            ui.separator();
            ui.label("Stamps:");

            // Collect glyphs first to avoid borrowing issues
            let glyphs: Vec<String> = app.stamp_palette().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let selected =
                        matches!(app.sketch().tools.tool(), Tool::Stamp(g) if g == glyph);
                    if ui.selectable_label(selected, glyph.as_str()).clicked() {
                        app.sketch_mut().select_stamp(glyph.clone());
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut app.new_stamp).desired_width(60.0));
                if ui.button("Add stamp").clicked() {
                    let glyph = std::mem::take(&mut app.new_stamp);
                    app.add_stamp(glyph);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.sketch().history.can_undo();
                let can_redo = app.sketch().history.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketch_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketch_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.sketch_mut().clear_all();
                }
            });

            ui.label(format!(
                "Committed: {}  Undone: {}",
                app.sketch().history.committed().len(),
                app.sketch().history.undone_len(),
            ));

            ui.separator();

            if ui.button("Export PNG").clicked() {
                app.export_png();
            }
        });
}
