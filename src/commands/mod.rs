//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod embed_image;
mod embed_message;
mod extract_image;
mod extract_message;

pub use capacity::CapacityCommand;
pub use embed_image::EmbedImageCommand;
pub use embed_message::EmbedMessageCommand;
pub use extract_image::ExtractImageCommand;
pub use extract_message::ExtractMessageCommand;

use std::path::Path;

use anyhow::Result;

use lsb_stego::{BoxError, OutputDir, StegoConfig};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, config: &StegoConfig) -> Result<()>;
}

/// Picks `--output-dir` when given, the configured directory otherwise.
fn output_dir(flag: Option<&Path>, configured: OutputDir) -> OutputDir {
    flag.map(OutputDir::new).unwrap_or(configured)
}

/// Completion hook that prints the written path to stdout.
fn print_path(path: &Path) -> Result<(), BoxError> {
    println!("{}", path.display());
    Ok(())
}
