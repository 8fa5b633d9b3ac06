/// Trait for reporting scan progress.
///
/// CLI implements with an indicatif spinner; tests use [`SilentReporter`].
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_scan_start(&self, _root: &str) {}
    fn on_scan_progress(&self, _entries_seen: usize, _current_path: &str) {}
    fn on_scan_complete(&self, _matches: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
