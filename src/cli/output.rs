//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{ColoredString, Colorize};

use crate::domain::LineageColor;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data/export statements)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Lineage tag label tinted with the lineage stroke color.
pub fn lineage_label(text: &str, color: LineageColor) -> ColoredString {
    let (r, g, b) = color.stroke_rgb();
    text.truecolor(r, g, b)
}

/// Solid two-column block painted with the given rgb color.
pub fn swatch((r, g, b): (u8, u8, u8)) -> ColoredString {
    "  ".on_truecolor(r, g, b)
}
