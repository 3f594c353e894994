//! Capacity command - how long a message a carrier can hold.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lsb_stego::{capacity, CarrierKind, StegoConfig};

use super::CommandExecutor;

/// Show how many characters a cover file can hide.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Path to the cover file (.wav is audio, anything else an image)
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Carrier kind, overriding detection by extension: image or audio
    #[arg(short, long)]
    pub kind: Option<CarrierKind>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self, _config: &StegoConfig) -> Result<()> {
        let kind = self
            .kind
            .unwrap_or_else(|| CarrierKind::from_path(&self.cover));

        let report = capacity(&self.cover, kind)
            .with_context(|| format!("Failed to read carrier {}", self.cover.display()))?;

        println!("Carrier:  {}", self.cover.display());
        println!("Kind:     {}", report.kind);
        if let Some((rows, columns, channels)) = report.shape {
            println!("Shape:    {} x {} x {}", rows, columns, channels);
        }
        println!("Samples:  {}", report.samples);
        println!("Capacity: {} characters", report.message_chars);

        Ok(())
    }
}
