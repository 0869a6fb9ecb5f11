// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::{debug, info};

use crate::{
    codes,
    config::state::AppState,
    scrape::RunSummary,
    sheet::Sheet,
};

/// What the scrape worker hands back to the UI thread.
pub type ScrapeOutcome = Result<(Sheet, RunSummary), String>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Facility Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // code list as edited in the left panel, one code per line
    pub codes_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last scraped table
    pub sheet: Option<Sheet>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // worker → UI handoff, polled every frame
    pub pending: Arc<Mutex<Option<ScrapeOutcome>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let (codes_text, status) = match codes::read_codes(&state.options.codes_path) {
            Ok(list) => {
                let msg = format!("Loaded {} code(s)", list.len());
                (list.join("\n"), msg)
            }
            Err(e) => {
                debug!("Init: no code list ({e})");
                (s!(), s!("Idle"))
            }
        };

        info!("Init: codes file={}", state.options.codes_path.display());

        Self {
            state,
            codes_text,
            out_path_text,
            out_path_dirty: false,
            sheet: None,
            status: Arc::new(Mutex::new(status)),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Codes currently in the text box, same rules as the codes file.
    pub fn codes(&self) -> Vec<String> {
        codes::parse_codes(&self.codes_text)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let outcome = self.pending.lock().unwrap().take();
        if let Some(outcome) = outcome {
            crate::gui::actions::finish_scrape(self, outcome);
        }

        egui::SidePanel::left("codes")
            .resizable(true)
            .default_width(self.state.gui.codes_panel_w)
            .show(ctx, |ui| {
                crate::gui::components::codes_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
