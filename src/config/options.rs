// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything one scrape run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Text file with one facility code per line.
    pub codes_path: PathBuf,
    /// Page URL prefix; the facility code is appended verbatim.
    pub base_url: String,
    /// `None` waits forever on a slow server.
    pub timeout: Option<Duration>,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            codes_path: PathBuf::from(DEFAULT_CODES_FILE),
            base_url: s!(BASE_URL),
            timeout: None,
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub sheet_name: String,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            sheet_name: s!(DEFAULT_SHEET_NAME),
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension wins; otherwise the format decides.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse a user-supplied path (CLI flag or GUI text box) into dir + stem + ext.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());

        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    /// True while the path is untouched, so a format switch may refresh it.
    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }

    /// Directory the export lands in (`.` when the path is bare).
    pub fn out_dir(&self) -> PathBuf {
        if self.out_path.dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            self.out_path.dir.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
