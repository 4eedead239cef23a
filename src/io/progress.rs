//! Batch progress display for multi-file runs

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::BATCH_BAR_THRESHOLD;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch estimation runs
///
/// Small batches finish fast enough that a bar is noise, so one is only
/// drawn once the file count crosses a threshold.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no display attached
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the display for a batch of the given size
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > BATCH_BAR_THRESHOLD {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark one file as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All files processed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_at_the_threshold_draw_no_bar() {
        let mut pm = ProgressManager::new();
        pm.initialize(BATCH_BAR_THRESHOLD);
        assert!(pm.batch_bar.is_none());
    }

    #[test]
    fn batches_above_the_threshold_draw_the_batch_bar() {
        let mut pm = ProgressManager::new();
        pm.initialize(BATCH_BAR_THRESHOLD + 1);
        assert!(pm.batch_bar.is_some());
    }
}
