//! Terminal feedback for the `modorder` commands.
//!
//! Status lines and the spinner go to stderr so that command output on
//! stdout (load orders, JSON reports) stays machine readable.

use std::io::Write;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

const LABEL_WIDTH: usize = 12;

fn print_labelled(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>width$} {message}",
        style.apply_to(label),
        width = LABEL_WIDTH,
    );
}

/// Outcome of a completed step, e.g. `    Resolved 42 packages`.
pub fn status(label: &str, message: &str) {
    print_labelled(Style::new().green().bold(), label, message);
}

/// Neutral information, e.g. `       Found 17 packages`.
pub fn status_info(label: &str, message: &str) {
    print_labelled(Style::new().cyan().bold(), label, message);
}

/// A step that finished with rejected packages or skipped sources.
pub fn status_warn(label: &str, message: &str) {
    print_labelled(Style::new().yellow().bold(), label, message);
}

/// Spinner shown while packages are discovered or resolved.
///
/// Hidden automatically when stderr is not a terminal. Callers finish it
/// with [`ProgressBar::finish_and_clear`] before printing results.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_keeps_message() {
        let pb = spinner("Resolving 3 packages");
        assert_eq!(pb.message(), "Resolving 3 packages");
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
