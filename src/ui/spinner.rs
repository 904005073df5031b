//! Progress spinner shown while binaries are introspected.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner counting introspected binaries on stderr.
///
/// Returns a hidden bar when `visible` is false or stderr is not a terminal,
/// so callers can advance it unconditionally.
pub fn introspection_spinner(total: usize, visible: bool) -> ProgressBar {
    if !visible || !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} Checking binaries {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
