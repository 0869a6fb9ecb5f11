// src/gui/components/data_table.rs
//
// Draws the live facility table. Purely a view over `App::sheet`.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, sheet::Sheet};

// Number, Name, Abbreviation, Address, Campus, Lat/Long
const COLUMN_WIDTHS: [f32; 6] = [90.0, 240.0, 90.0, 240.0, 150.0, 170.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let rows: &[Vec<String>] = app.sheet.as_ref().map(Sheet::rows).unwrap_or(&[]);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for w in COLUMN_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in Sheet::headers() {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                if let Some(data) = rows.get(row.index()) {
                    for cell in data {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                }
            });
        });
}
