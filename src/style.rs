//! Terminal styling for operator-facing messages.

use colored::Colorize;
use std::fmt::Display;

/// Presentation classes used at print sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Failures and retry notices
    Error,
    /// Informational notices and documentation
    Info,
    /// Input hints and follow-up instructions
    Hint,
}

/// Renders `text` with the color assigned to `style`.
pub fn paint<T: Display>(text: T, style: Style) -> String {
    let text = text.to_string();
    match style {
        Style::Error => text.red().to_string(),
        Style::Info => text.cyan().to_string(),
        Style::Hint => text.magenta().to_string(),
    }
}
