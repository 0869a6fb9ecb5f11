// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of facility codes.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A facility was fetched, parsed and written.
    fn item_done(&mut self, _code: &str) {}

    /// A facility was parsed but its row was rejected by the sheet.
    fn item_skipped(&mut self, _code: &str, _reason: &str) {}

    /// Called at the end of a run that got through every code.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
