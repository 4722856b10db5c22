//! Optional `indicatif` progress display for the graph-state drive loop.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Reports progress every 1000 applied ops when enabled; a no-op otherwise, so the
/// `display_progress: false` path never pays for bar construction.
pub(crate) struct ProgressReporter {
    bar: Option<ProgressBar>,
}

const REPORT_INTERVAL: usize = 1000;

impl ProgressReporter {
    pub(crate) fn new(total_ops: usize, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new(total_ops as u64);
        bar.set_style(
            ProgressStyle::with_template("{percent}% [{pos}/{len}] elapsed {elapsed}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar: Some(bar) }
    }

    pub(crate) fn tick(&self, completed: usize) {
        let Some(bar) = &self.bar else { return };
        bar.set_position(completed as u64);
        if completed % REPORT_INTERVAL == 0 {
            info!("graph-state drive: {completed} ops applied");
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }
}
