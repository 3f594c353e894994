//! Embed-message command - hide text in an image or WAV file.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use lsb_stego::bits::char_len;
use lsb_stego::{embed_audio_message, embed_image_message, CarrierKind, StegoConfig};

use super::{output_dir, print_path, CommandExecutor};

/// Hide a text message in a cover image or WAV file.
///
/// Images hold up to 255 characters (less for small images); audio holds
/// up to 31 characters. Only characters with code points 0-255 are allowed.
#[derive(Args, Debug)]
pub struct EmbedMessageCommand {
    /// Path to the cover file (.wav is audio, anything else an image)
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Message to hide (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Carrier kind, overriding detection by extension: image or audio
    #[arg(short, long)]
    pub kind: Option<CarrierKind>,

    /// Directory for the stego file (overrides the configured one)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl CommandExecutor for EmbedMessageCommand {
    fn execute(&self, config: &StegoConfig) -> Result<()> {
        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim_end_matches(['\r', '\n']).to_string()
            }
        };

        let kind = self
            .kind
            .unwrap_or_else(|| CarrierKind::from_path(&self.cover));
        debug!(%kind, chars = char_len(&message), "embedding message");

        let result = match kind {
            CarrierKind::Image => embed_image_message(
                &self.cover,
                &message,
                &output_dir(self.output_dir.as_deref(), config.image_output()),
                Some(&mut print_path),
            ),
            CarrierKind::Audio => embed_audio_message(
                &self.cover,
                &message,
                &output_dir(self.output_dir.as_deref(), config.audio_output()),
                Some(&mut print_path),
            ),
        };
        result.with_context(|| format!("Failed to embed message in {}", self.cover.display()))?;

        Ok(())
    }
}
