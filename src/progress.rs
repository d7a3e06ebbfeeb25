//! Progress feedback for exercise conversion.
//!
//! Progress bars use the `indicatif` library and are drawn on stderr.
//!
//! # Progress Behavior
//!
//! - **Quiet Mode**: No progress output (respects `KATA_FORGE_QUIET` env var and `--quiet` flag)
//! - **Non-TTY**: Gracefully disables progress bars in CI and piped output
//!
//! # Examples
//!
//! ```rust,no_run
//! use kata_forge::progress::{ProgressConfig, ProgressManager, TEMPLATE_EXERCISES};
//!
//! let manager = ProgressManager::new(ProgressConfig::from_env(false));
//! let progress = manager.create_bar(100, TEMPLATE_EXERCISES);
//! progress.set_message("Converting");
//! for _ in 0..100 {
//!     progress.inc(1);
//! }
//! progress.finish_with_message("Done");
//! ```

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;

// Progress bar templates
pub const TEMPLATE_EXERCISES: &str = "📝 {msg} {pos}/{len} exercises ({percent}%) - {eta}";
pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("KATA_FORGE_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Coordinates the progress bars of one command
#[derive(Clone)]
pub struct ProgressManager {
    multi: Arc<MultiProgress>,
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            multi: Arc::new(MultiProgress::new()),
            config,
        }
    }

    /// Create a progress bar with the given length and template
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new(len));
        match ProgressStyle::default_bar().template(template) {
            Ok(style) => pb.set_style(style.progress_chars("█▓▒░  ")),
            Err(e) => tracing::debug!("Invalid progress bar template: {}", e),
        }
        pb
    }

    /// Create a spinner progress bar with the given message
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_spinner(&self, msg: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new_spinner());
        match ProgressStyle::default_spinner().template(TEMPLATE_SPINNER) {
            Ok(style) => pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")),
            Err(e) => tracing::debug!("Invalid spinner template: {}", e),
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Clear all progress bars before printing final output
    pub fn clear(&self) -> std::io::Result<()> {
        self.multi.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::from_env(true);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_quiet_manager_creates_hidden_bars() {
        let manager = ProgressManager::new(ProgressConfig { quiet_mode: true });

        assert!(manager.create_bar(100, TEMPLATE_EXERCISES).is_hidden());
        assert!(manager.create_spinner("Loading").is_hidden());
    }
}
