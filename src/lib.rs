//! theme-builder customizes a theme template in place.
//! Operator answers decide which conditional blocks and optional files survive,
//! fill the placeholder tokens, and generate repeatable files from prototypes.

/// Validated operator answers: yes/no decisions, identifiers and free text
pub mod answer;

/// Command-line interface module
pub mod cli;

/// Builder manifest handling
/// Supports JSON and YAML formats (builder.json, builder.yml, builder.yaml)
pub mod config;

pub mod constants;

/// Error types and handling
pub mod error;

/// The question sequence driving every transformation
pub mod flow;

/// Cloning of prototype files into named instances
pub mod instances;

/// Run cancellation
pub mod interrupt;

pub mod logger;

/// Open/close markers of conditional blocks
pub mod matcher;

/// The template project and its configuration
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Deletion of optional files and directories
pub mod prune;

/// Find and replace across the project tree
pub mod replace;

pub mod style;

/// Keeping or deleting conditional blocks
pub mod tags;

/// Restoring the project tree to its committed state
pub mod workspace;
