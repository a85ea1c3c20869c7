use eframe::egui;

use crate::app::PixelPaintApp;
use crate::color::Color;
use crate::components::ToolButton;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut PixelPaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.editor().state().tool;
            ui.horizontal_wrapped(|ui| {
                for kind in ToolKind::ALL {
                    if ToolButton::new(kind, kind == active).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", kind);
                        app.editor_mut().set_tool(kind);
                    }
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let color = app.editor().state().color;
                let mut rgb = color.to_array();
                if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                    app.editor_mut().set_color(Color::from(rgb));
                }
                ui.monospace(color.to_string());
            });
            ui.separator();

            let state = app.editor().state();
            let can_undo = state.can_undo();
            let depth = state.history_depth();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(can_undo, egui::Button::new("⮪ Undo"))
                    .on_hover_text("Ctrl+Z")
                    .clicked()
                {
                    app.editor_mut().undo();
                }
                ui.label(format!("{} steps", depth));
            });
            ui.separator();

            if ui.button("💾 Save PNG").clicked() {
                app.save();
            }
            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.import_path_mut());
                if ui.add_enabled(!app.is_importing(), egui::Button::new("📂 Load")).clicked() {
                    app.open_import_path();
                }
            });
            ui.small("…or drop an image onto the window");

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
