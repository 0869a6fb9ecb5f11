// src/scrape.rs
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    codes,
    config::options::RunOptions,
    core::net::{HttpFetcher, PageSource},
    error::{Error, Result},
    facility::FacilityRecord,
    progress::Progress,
    sheet::{Sheet, SinkError},
    specs,
};

/// A record that was parsed but never made it into the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub code: String,
    pub error: SinkError,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: Vec<Skipped>,
}

/// Result of a full run: what was written and where.
#[derive(Debug)]
pub struct RunReport {
    pub summary: RunSummary,
    pub path: PathBuf,
}

/// Fetch and parse one facility, tagged with its code.
pub fn scrape_facility(source: &dyn PageSource, code: &str) -> Result<FacilityRecord> {
    let page = source
        .fetch_page(code)
        .map_err(|source| Error::Fetch { code: s!(code), source })?;

    let record = specs::facility::extract(&page)
        .map_err(|source| Error::Extract { code: s!(code), source })?;

    Ok(record.with_number(code))
}

/// Process `codes` in order into `sheet`, one facility at a time.
///
/// Fetch and parse failures abort the run. A row the sheet refuses is
/// reported and skipped, and the run carries on with the next code.
pub fn collect_facilities(
    codes: &[String],
    source: &dyn PageSource,
    sheet: &mut Sheet,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(codes.len());
    }

    let mut summary = RunSummary::default();

    for code in codes {
        info!(%code, "parsing facility");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Parsing facility: {code}"));
        }

        let record = scrape_facility(source, code)?;

        match sheet.append(&record) {
            Ok(row) => {
                info!(%code, row, sheet = sheet.name(), "wrote facility");
                summary.written += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(code);
                }
            }
            Err(error) => {
                warn!(%code, %error, "could not write facility, skipping");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(code, &error.to_string());
                }
                summary.skipped.push(Skipped { code: code.clone(), error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Scrape `codes` over HTTP into a fresh sheet (nothing is saved).
pub fn scrape_codes(
    opts: &RunOptions,
    codes: &[String],
    progress: Option<&mut dyn Progress>,
) -> Result<(Sheet, RunSummary)> {
    let fetcher = HttpFetcher::new(opts).map_err(Error::Client)?;
    let mut sheet = Sheet::new(opts.export.sheet_name.as_str());
    let summary = collect_facilities(codes, &fetcher, &mut sheet, progress)?;
    Ok((sheet, summary))
}

/// The whole batch: read codes, scrape them all, save the table once.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    let codes = codes::read_codes(&opts.codes_path)?;
    let (sheet, summary) = scrape_codes(opts, &codes, progress)?;

    let path = sheet.save(&opts.export.out_path(), opts.export.format)?;
    info!(
        path = %path.display(),
        written = summary.written,
        skipped = summary.skipped.len(),
        "saved facility table"
    );

    Ok(RunReport { summary, path })
}
