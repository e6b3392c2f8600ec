//! Progress display while blocking npm invocations run
//!
//! Uses indicatif spinners/bars drawn on stderr. Disabled in verbose mode,
//! where commands are echoed instead, and when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const BAR_TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress reporter for the upgrade workflow
pub struct Progress {
    /// Whether progress display is enabled
    enabled: bool,
    /// Current spinner or bar
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Enable progress only for interactive, non-verbose runs
    pub fn for_terminal(verbose: bool) -> Self {
        Self::new(!verbose && std::io::stderr().is_terminal())
    }

    /// Show a spinner for an operation of unknown length
    pub fn spinner(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Start a bar for a known number of packages
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled || total == 0 {
            return;
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Increment progress by one
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Update the message
    pub fn set_message(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Finish and clear the current spinner or bar
    pub fn finish_and_clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_disabled() {
        let mut progress = Progress::disabled();
        assert!(!progress.enabled);
        progress.spinner("Checking for outdated packages");
        progress.start(3, "Upgrading");
        progress.inc();
        progress.set_message("Installing lodash@4.17.21");
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_progress_enabled() {
        let mut progress = Progress::new(true);
        progress.start(2, "Upgrading");
        progress.set_message("Installing a@1.1.0");
        progress.inc();
        progress.inc();
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_start_with_zero_total_draws_nothing() {
        let mut progress = Progress::new(true);
        progress.start(0, "Upgrading");
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_for_terminal_verbose_is_disabled() {
        assert!(!Progress::for_terminal(true).enabled);
    }
}
