//! Load progress reporting.

/// Trait for receiving catalog-load progress updates.
pub trait LoadProgress {
    /// Called every [`crate::LOAD_INTERVAL`] records while the file is read.
    fn on_record(&self, loaded: usize);

    /// Called once when the load finishes.
    fn on_complete(&self, total: usize);
}

/// A no-op reporter that discards all updates.
pub struct SilentProgress;

impl LoadProgress for SilentProgress {
    fn on_record(&self, _loaded: usize) {}
    fn on_complete(&self, _total: usize) {}
}

/// A reporter that logs to the `log` crate.
pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_record(&self, loaded: usize) {
        log::info!("  {loaded} games loaded");
    }

    fn on_complete(&self, total: usize) {
        log::info!("finished loading {total} games");
    }
}
