use std::fmt::Display;

use colored::{Color, Colorize};

const GLASSBOX_COLOR: Color = Color::BrightCyan;

/// Prints an informational line to stdout with the crate's colored prefix
pub fn println_glassbox_info<D: Display>(msg: D) {
    println!("{}: {}", "glassbox".color(GLASSBOX_COLOR).dimmed(), msg);
}

/// Prints an error line to stderr with a red prefix
pub fn println_glassbox_error<D: Display>(msg: D) {
    eprintln!("{}: {}", "glassbox".red(), msg);
}
