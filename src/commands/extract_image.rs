//! Extract-image command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lsb_stego::{extract_image, StegoConfig};

use super::{output_dir, print_path, CommandExecutor};

/// Recover the hidden bit-plane of a stego image as a black and white PNG.
#[derive(Args, Debug)]
pub struct ExtractImageCommand {
    /// Path to the stego image
    #[arg(short, long)]
    pub stego: PathBuf,

    /// Directory for the extracted image (overrides the configured one)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl CommandExecutor for ExtractImageCommand {
    fn execute(&self, config: &StegoConfig) -> Result<()> {
        let output = output_dir(self.output_dir.as_deref(), config.image_output());

        extract_image(&self.stego, &output, Some(&mut print_path))
            .with_context(|| format!("Failed to extract image from {}", self.stego.display()))?;

        Ok(())
    }
}
