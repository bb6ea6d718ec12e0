//! Terminal output helpers: colored status lines and progress spinners.

use std::fmt::Display;
use std::time::Duration;

use owo_colors::OwoColorize;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a dimmed note.
pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Create and start a progress spinner.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(SPINNER_FRAMES)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "×".red(), message));
}
