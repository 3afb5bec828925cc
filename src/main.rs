//! This binary is the interactive entry point of the glassbox crate.
//! Run directly it only tells you where the interesting code lives; the
//! library is meant to be exercised from the test suite.

#![warn(missing_docs)]

use std::error::Error;

use clap::Parser;
use glassbox::printer::println_glassbox_info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();
    println_glassbox_info("This is a FizzBuzz module.");
    println_glassbox_info("Try calling classify(n) with an integer n.");
    Ok(())
}
