// src/log.rs
//
// tracing setup shared by both binaries. Lines carry time since start,
// like `[00:00:01.234]`, so a slow facility stands out in the log.
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime, prelude::*};

use crate::file::ensure_directory;

/// Install the global subscriber.
///
/// `default_filter` applies unless `RUST_LOG` is set. When `file` is given,
/// every event is also appended there (no colors). Calling this twice is a no-op.
pub fn init(default_filter: &str, file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let f = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_timer(Uptime::default())
                    .with_writer(Mutex::new(f)),
            )
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_timer(Uptime::default())
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

/// Map `-v`/`-q` counts to a filter directive for this crate.
pub fn filter_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "warn,facility_scrape=info",
        2 => "warn,facility_scrape=debug",
        _ => "debug",
    }
}
