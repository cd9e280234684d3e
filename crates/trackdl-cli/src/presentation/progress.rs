//! Progress bar fed by pipeline events.

use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use trackdl_core::JobEvent;

/// Renders a job's progress events.
///
/// Draws an indicatif bar on a terminal and stays silent otherwise.
pub struct JobProgress {
    bar: ProgressBar,
}

impl JobProgress {
    /// Create a bar drawing to stderr, hidden when stderr is not a terminal.
    pub fn new() -> Self {
        let target = if io::stderr().is_terminal() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self::with_draw_target(target)
    }

    /// Create a bar that never draws.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), target);
        bar.set_style(Self::bar_style());
        bar.set_message("Fetching track info...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░")
    }

    /// Apply one event to the bar.
    pub fn update(&self, event: &JobEvent) {
        match event {
            JobEvent::Progress(progress) => {
                self.bar.set_position(u64::from(progress.percent));
                self.bar.set_message(progress.message.clone());
            }
            JobEvent::Completed { .. } => self.bar.finish_and_clear(),
            JobEvent::Failed { .. } | JobEvent::Cancelled => self.bar.abandon(),
        }
    }

    /// Current position, in percent.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop drawing without waiting for a terminal event.
    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Default for JobProgress {
    fn default() -> Self {
        Self::new()
    }
}
