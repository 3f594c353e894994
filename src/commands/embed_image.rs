//! Embed-image command - hide an image's top bit-plane in a cover image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lsb_stego::{embed_image, EqualSamplePolicy, StegoConfig};

use super::{output_dir, print_path, CommandExecutor};

/// Hide a secret image inside a cover image of the same dimensions.
///
/// Each cover sample keeps its upper 7 bits and takes the top bit of the
/// secret's sample. The result is written as PNG.
#[derive(Args, Debug)]
pub struct EmbedImageCommand {
    /// Path to the cover image
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Path to the secret image (same width and height as the cover)
    #[arg(short, long)]
    pub secret: PathBuf,

    /// Directory for the stego image (overrides the configured one)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Treatment of cover samples that already equal the secret
    /// (overrides the configured policy): substitute or skip
    #[arg(long, value_enum)]
    pub equal_samples: Option<EqualSamplePolicy>,
}

impl CommandExecutor for EmbedImageCommand {
    fn execute(&self, config: &StegoConfig) -> Result<()> {
        let output = output_dir(self.output_dir.as_deref(), config.image_output());
        let policy = self.equal_samples.unwrap_or(config.equal_samples);

        embed_image(&self.cover, &self.secret, &output, policy, Some(&mut print_path))
            .with_context(|| {
                format!(
                    "Failed to embed {} in {}",
                    self.secret.display(),
                    self.cover.display()
                )
            })?;

        Ok(())
    }
}
