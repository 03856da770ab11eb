//! Input/output operations and error handling

/// Command-line interface and subcommand runners
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and the crate-wide `Result` alias
pub mod error;
/// GIF encoding with delay and loop control
pub mod gif;
/// Image decoding and input discovery
pub mod image;
/// Progress reporting
pub mod progress;
