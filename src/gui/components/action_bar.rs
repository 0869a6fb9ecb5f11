// src/gui/components/action_bar.rs

use std::path::{Path, PathBuf};

use eframe::egui::{self, widgets::Spinner};
use tracing::{debug, error, info};

use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            info!("UI: Export format → {:?}", export.format);

            // If the path is still the default and the user hasn't typed,
            // refresh the text field to reflect the new extension.
            if !app.out_path_dirty && export.is_default_path() {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                debug!("UI: out_path_text refreshed to match format (default path)");
            }
        }
    }

    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        open_output_folder(app);
    }

    // Actions: Copy / Export / Scrape
    use crate::gui::actions;
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}

/// Open the folder the export lands in, or its nearest existing parent.
fn open_output_folder(app: &App) {
    let folder = app.state.options.export.out_dir();
    let folder_to_open = find_nearest_existing_parent(&folder);

    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            error!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        error!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        info!("Opened folder: {}", absolute_folder.display());
    }
}

fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {program}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err("Opening folders not supported on this platform".to_string())
    }
}
