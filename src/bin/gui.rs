// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use facility_scrape::{
    config::{consts::{LOG_FILE, STORE_DIR}, state::AppState},
    gui, log,
};

fn main() {
    let log_path = PathBuf::from(STORE_DIR).join(LOG_FILE);
    let filter = "warn,facility_scrape=info";
    if let Err(e) = log::init(filter, Some(&log_path)) {
        eprintln!("Logging to {} disabled: {}", log_path.display(), e);
        let _ = log::init(filter, None);
    }

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
