//! Command-line interface implementation for theme-builder.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for theme-builder.
#[derive(Parser, Debug)]
#[command(author, version, about = "theme-builder: customize a theme template by answering questions", long_about = None)]
pub struct Args {
    /// Root directory of the theme template
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
