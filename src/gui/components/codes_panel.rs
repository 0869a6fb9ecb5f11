// src/gui/components/codes_panel.rs
//
// Left panel: the facility code list. Editable in place; Reload re-reads the
// codes file and replaces whatever is in the box.

use eframe::egui;
use tracing::{error, info};

use crate::{codes, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Facility codes");

    let path = app.state.options.codes_path.clone();
    ui.horizontal(|ui| {
        ui.add_enabled_ui(!app.running, |ui| {
            if ui
                .button("Reload")
                .on_hover_text(format!("Read {}", path.display()))
                .clicked()
            {
                match codes::read_codes(&path) {
                    Ok(list) => {
                        info!("UI: Reloaded {} code(s) from {}", list.len(), path.display());
                        app.status(format!("Loaded {} code(s)", list.len()));
                        app.codes_text = list.join("\n");
                    }
                    Err(e) => {
                        error!("UI: Reload failed: {e}");
                        app.status(format!("Error: {e}"));
                    }
                }
            }
        });
        ui.label(format!("{} code(s)", app.codes().len()));
    });

    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_enabled(
            !app.running,
            egui::TextEdit::multiline(&mut app.codes_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(24),
        );
    });
}
