//! Progress display for multi-round simulation

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROUNDS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rounds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed rounds during a simulation
///
/// Updates are batched every [`PROGRESS_UPDATE_INTERVAL`] rounds so the
/// display does not dominate evaluation time.
pub struct SimulationProgress {
    bar: ProgressBar,
    pending: usize,
}

impl SimulationProgress {
    /// Create a visible progress bar for the given number of rounds
    pub fn new(rounds: usize) -> Self {
        let bar = ProgressBar::new(rounds as u64);
        bar.set_style(ROUNDS_STYLE.clone());
        Self { bar, pending: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            pending: 0,
        }
    }

    /// Record one completed round
    ///
    /// Returns `true` when the display was refreshed.
    pub fn advance(&mut self) -> bool {
        self.pending += 1;
        if self.pending >= PROGRESS_UPDATE_INTERVAL {
            self.flush();
            return true;
        }
        false
    }

    /// Rounds recorded so far, including unflushed ones
    pub fn completed(&self) -> u64 {
        self.bar.position() + self.pending as u64
    }

    /// Show the running return to player next to the bar
    pub fn set_return_to_player(&self, return_to_player: f64) {
        self.bar
            .set_message(format!("RTP {:.2}%", return_to_player * 100.0));
    }

    /// Flush pending rounds and close the bar
    pub fn finish(&mut self) {
        self.flush();
        self.bar.finish();
    }

    fn flush(&mut self) {
        self.bar.inc(self.pending as u64);
        self.pending = 0;
    }
}
