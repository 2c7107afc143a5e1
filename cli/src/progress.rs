use collabpath_core::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Shows search progress as a percentage bar on stderr.
pub struct SearchProgressBar {
    bar: ProgressBar,
}

impl SearchProgressBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos:>3}% {msg}",
        ) {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    /// A bar that draws nothing, for JSON and quiet output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for SearchProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SearchProgressBar {
    fn report(&mut self, percent: u8, message: &str) {
        self.bar.set_position(u64::from(percent));
        self.bar.set_message(message.to_string());
    }
}
