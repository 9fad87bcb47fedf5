use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar shown while a batch is being checked.
///
/// Disabled reporters are no-ops, so callers never need to branch on
/// whether output is interactive.
pub struct ProgressReporter {
    check_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            check_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_checking(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_urls as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs checked {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        self.check_progress = Some(pb);
    }

    /// Handle that concurrent probes can tick independently.
    pub fn ticker(&self) -> Option<ProgressBar> {
        self.check_progress.clone()
    }

    pub fn checked_count(&self) -> u64 {
        self.check_progress
            .as_ref()
            .map(ProgressBar::position)
            .unwrap_or(0)
    }

    pub fn finish_checking(&self, success_count: usize, total_count: usize) {
        if let Some(ref pb) = self.check_progress {
            let message = if success_count == total_count {
                "✓ All URLs reachable".to_string()
            } else {
                format!("✓ Check complete ({success_count}/{total_count} successful)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.check_progress {
            pb.finish_and_clear();
        }
    }
}
