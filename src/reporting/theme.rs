//! Console styles.

use colored::{ColoredString, Colorize};

use crate::core::config::ColorChoice;

/// The handful of styles the console report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Passed tests
    Pass,
    /// Failed tests
    Fail,
    /// Progress and labels
    Info,
    /// Section headers and emphasised values
    Header,
    /// Names and paths called out inside a line
    Highlight,
    /// Streamed test output prefix
    Muted,
}

impl Style {
    pub fn paint(self, text: impl AsRef<str>) -> ColoredString {
        let text = text.as_ref();
        match self {
            Style::Pass => text.bright_green(),
            Style::Fail => text.bright_red(),
            Style::Info => text.bright_cyan(),
            Style::Header => text.white().bold(),
            Style::Highlight => text.bright_yellow(),
            Style::Muted => text.dimmed(),
        }
    }
}

/// Applies the colour preference process-wide.
///
/// `Auto` defers to `colored`'s own detection (terminal check, `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE`).
pub fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}
