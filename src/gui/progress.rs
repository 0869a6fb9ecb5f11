// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Worker-side progress: writes the status line and pokes the UI to repaint.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    skipped: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, skipped: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Starting… {total} facility(ies)"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, code: &str) {
        self.done += 1;
        self.set_status(format!("Fetched facility {} ({}/{})", code, self.done, self.total));
    }
    fn item_skipped(&mut self, code: &str, reason: &str) {
        self.done += 1;
        self.skipped += 1;
        self.set_status(format!("Skipped facility {code}: {reason}"));
    }
    fn finish(&mut self) {
        if self.skipped == 0 {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!(
                "Fetch complete ({}/{}, {} skipped)",
                self.done, self.total, self.skipped
            ));
        }
    }
}
