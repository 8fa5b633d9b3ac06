use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;
use symlinker_core::ProgressReporter;

/// Spinner on stderr while the home directory is walked.
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self, root: &str) {
        self.finish_bar();
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(format!("Scanning {}...", root));
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.bar.borrow_mut() = Some(pb);
    }

    fn on_scan_progress(&self, entries_seen: usize, _current_path: &str) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_message(format!("Scanning... {} entries checked", entries_seen));
        }
    }

    fn on_scan_complete(&self, matches: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Scan complete: {} found in {:.2}s",
            "✓".green(),
            matches,
            duration_secs
        );
    }
}
