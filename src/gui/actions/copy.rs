// src/gui/actions/copy.rs
use eframe::egui;
use tracing::info;

use crate::gui::app::App;

/// Copy the table, header included, in the selected format.
pub fn copy(app: &App, ctx: &egui::Context) {
    let Some(sheet) = &app.sheet else {
        app.status("Nothing to copy");
        return;
    };

    let format = app.state.options.export.format;
    ctx.copy_text(sheet.to_delimited(format));

    info!("Copy: rows={} format={:?}", sheet.len(), format);
    app.status(format!("Copied {} row(s) to clipboard", sheet.len()));
}
