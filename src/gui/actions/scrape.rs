// src/gui/actions/scrape.rs
use std::thread;

use eframe::egui;
use tracing::{error, info};

use crate::{
    gui::{app::{App, ScrapeOutcome}, progress::GuiProgress},
    scrape,
};

/// Start a scrape of the codes in the text box on a worker thread.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running { return; }

    let codes = app.codes();
    if codes.is_empty() {
        app.status("No facility codes to scrape");
        return;
    }

    info!("Scrape: Begin codes={}", codes.len());
    app.running = true;

    let opts = app.state.options.clone();
    let status = app.status.clone();
    let pending = app.pending.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());

        // → This is where the scrape happens ←
        let outcome = scrape::scrape_codes(&opts, &codes, Some(&mut prog))
            .map_err(|e| e.to_string());

        *pending.lock().unwrap() = Some(outcome);
        ctx.request_repaint();
    });
}

/// Take the worker's result on the UI thread.
pub fn finish_scrape(app: &mut App, outcome: ScrapeOutcome) {
    app.running = false;

    match outcome {
        Ok((sheet, summary)) => {
            info!(
                "Scrape: OK rows={} skipped={}",
                summary.written,
                summary.skipped.len()
            );
            let msg = if summary.skipped.is_empty() {
                format!("Ready: {} row(s)", summary.written)
            } else {
                let codes: Vec<&str> = summary.skipped.iter().map(|s| s.code.as_str()).collect();
                format!(
                    "Ready: {} row(s), skipped {}",
                    summary.written,
                    codes.join(", ")
                )
            };
            app.sheet = Some(sheet);
            app.status(msg);
        }
        Err(e) => {
            error!("Scrape: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
