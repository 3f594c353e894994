//! lsb-stego - hide images and messages in images and WAV audio
//!
//! A CLI over the LSB codecs of the `lsb_stego` library.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CapacityCommand, CommandExecutor, EmbedImageCommand, EmbedMessageCommand,
    ExtractImageCommand, ExtractMessageCommand,
};
use lsb_stego::StegoConfig;

/// lsb-stego - LSB steganography for images and audio
///
/// Hide a secret image inside a cover image, or a short text message inside
/// an image or a WAV file, and get them back.
#[derive(Parser)]
#[command(name = "lsb-stego")]
#[command(version)]
#[command(about = "LSB steganography: hide images and messages in images and WAV audio")]
#[command(long_about = None)]
struct Cli {
    /// TOML configuration file (output directories, equal-sample policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a secret image inside a cover image
    EmbedImage(EmbedImageCommand),

    /// Recover a hidden image from a stego image
    ExtractImage(ExtractImageCommand),

    /// Hide a text message in an image or WAV file
    EmbedMessage(EmbedMessageCommand),

    /// Recover a hidden message from an image or WAV file
    ExtractMessage(ExtractMessageCommand),

    /// Show how many characters a cover can hide
    Capacity(CapacityCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Self::EmbedImage(cmd) => cmd,
            Self::ExtractImage(cmd) => cmd,
            Self::EmbedMessage(cmd) => cmd,
            Self::ExtractMessage(cmd) => cmd,
            Self::Capacity(cmd) => cmd,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "lsb_stego=debug"
    } else {
        "lsb_stego=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StegoConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StegoConfig::default(),
    };

    cli.command.executor().execute(&config)
}
