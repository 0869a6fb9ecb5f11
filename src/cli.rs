// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        consts::{BASE_URL, DEFAULT_CODES_FILE},
        options::{ExportFormat, RunOptions},
    },
    progress::Progress,
    scrape,
};

#[derive(Debug, Parser)]
#[command(
    name = "facility_scrape",
    version,
    about = "Scrape facility name, address, campus and coordinates into one table"
)]
pub struct Args {
    /// Facility code list, one code per line
    #[arg(short, long, default_value = DEFAULT_CODES_FILE)]
    pub codes: PathBuf,

    /// Output file (extension defaults to the format)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Page URL prefix; the facility code is appended
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Give up on a page after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Also append log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No per-facility console lines; errors only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions {
            codes_path: self.codes.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..RunOptions::default()
        };
        opts.export.format = self.format.into();
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Console progress: a banner and a status line per facility on stdout.
struct ConsoleProgress {
    quiet: bool,
    sheet: String,
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        if self.quiet { return; }
        println!("#####################################");
        println!("{msg}");
    }
    fn item_done(&mut self, code: &str) {
        self.done += 1;
        if self.quiet { return; }
        println!("Writing facility {code} to {} ({}/{})", self.sheet, self.done, self.total);
    }
    fn item_skipped(&mut self, code: &str, reason: &str) {
        self.done += 1;
        eprintln!("Warning: facility {code} not written: {reason}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    crate::log::init(
        crate::log::filter_for(args.verbose, args.quiet),
        args.log_file.as_deref(),
    )
    .wrap_err("could not open log file")?;

    let opts = args.to_options();
    let mut console = ConsoleProgress {
        quiet: args.quiet,
        sheet: opts.export.sheet_name.clone(),
        done: 0,
        total: 0,
    };

    let report = scrape::run(&opts, Some(&mut console))
        .wrap_err_with(|| format!("scrape of {} failed", opts.codes_path.display()))?;

    let skipped = report.summary.skipped.len();
    println!(
        "Wrote {} ({} rows{})",
        report.path.display(),
        report.summary.written,
        if skipped > 0 { format!(", {skipped} skipped") } else { s!() },
    );
    Ok(())
}
