use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a request is in flight
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// A progress bar that draws nothing, for machine-readable output
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

pub fn start(pb: &ProgressBar) {
    pb.enable_steady_tick(Duration::from_millis(100));
}
