// src/sheet.rs
//! In-memory output table: fixed six-column header, one row per facility.
//!
//! Rows are only ever appended. Nothing touches disk until [`Sheet::save`],
//! which the driver calls once at the end of a run.
//!
//! `append` enforces the limits of the legacy `.xls` sheets this table
//! replaces, so a file that opens there today keeps opening there. Breaking a
//! limit rejects that one record; the caller decides what to do about it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::options::ExportFormat;
use crate::csv::rows_to_string;
use crate::error::{Error as RunError, Result};
use crate::facility::{FacilityRecord, Field};
use crate::file::write_text;

/// Longest text a single cell may hold.
pub const MAX_CELL_CHARS: usize = 32_767;
/// Rows per sheet, header included.
pub const MAX_ROWS: usize = 65_536;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("'{column}' is {len} characters long (limit {limit})", limit = MAX_CELL_CHARS)]
    CellTooLong { column: &'static str, len: usize },

    #[error("sheet is full ({limit} rows)", limit = MAX_ROWS)]
    SheetFull,
}

#[derive(Clone, Debug)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), rows: Vec::new() }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn headers() -> [&'static str; 6] {
        Field::ALL.map(Field::header)
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Append one record. Returns the sheet row it landed on (header is row 0).
    pub fn append(&mut self, record: &FacilityRecord) -> Result<usize, SinkError> {
        if self.rows.len() + 1 >= MAX_ROWS {
            return Err(SinkError::SheetFull);
        }

        let row = record.to_row();
        for (field, cell) in Field::ALL.iter().zip(&row) {
            let len = cell.chars().count();
            if len > MAX_CELL_CHARS {
                return Err(SinkError::CellTooLong { column: field.header(), len });
            }
        }

        self.rows.push(row);
        Ok(self.rows.len())
    }

    /// Header + rows as delimited text.
    pub fn to_delimited(&self, format: ExportFormat) -> String {
        rows_to_string(&Self::headers(), &self.rows, format.delim())
    }

    /// Persist the whole table to `path`, creating parent directories.
    pub fn save(&self, path: &Path, format: ExportFormat) -> Result<PathBuf> {
        write_text(path, &self.to_delimited(format))
            .map_err(|source| RunError::Save { path: path.to_path_buf(), source })?;
        Ok(path.to_path_buf())
    }
}
