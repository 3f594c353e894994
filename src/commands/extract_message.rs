//! Extract-message command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lsb_stego::{extract_audio_message, extract_image_message, CarrierKind, StegoConfig};

use super::CommandExecutor;

/// Recover a message hidden in an image or WAV file.
#[derive(Args, Debug)]
pub struct ExtractMessageCommand {
    /// Path to the stego file (.wav is audio, anything else an image)
    #[arg(short, long)]
    pub stego: PathBuf,

    /// Carrier kind, overriding detection by extension: image or audio
    #[arg(short, long)]
    pub kind: Option<CarrierKind>,

    /// Write the message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for ExtractMessageCommand {
    fn execute(&self, _config: &StegoConfig) -> Result<()> {
        let kind = self
            .kind
            .unwrap_or_else(|| CarrierKind::from_path(&self.stego));

        let message = match kind {
            CarrierKind::Image => extract_image_message(&self.stego, None),
            CarrierKind::Audio => extract_audio_message(&self.stego, None),
        }
        .with_context(|| format!("Failed to extract message from {}", self.stego.display()))?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, message.as_bytes())
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Message written to: {}", output_path.display());
        } else {
            println!("{}", message);
        }

        Ok(())
    }
}
