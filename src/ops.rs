//! File-level operations.
//!
//! Each operation loads its carriers fresh, runs the codec, writes the result
//! under the given [`OutputDir`] and then calls the optional completion hook.
//! Preconditions are checked before anything is written, so a failing
//! operation leaves no output file behind.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::bits::char_len;
use crate::error::{BoxError, Result, StegoError};
use crate::output::{OutputDir, OutputKind};
use crate::stego::{AudioStego, EqualSamplePolicy, ImageStego};

/// Hook called with the path of a freshly written file.
pub type PathHook<'a> = Option<&'a mut dyn FnMut(&Path) -> std::result::Result<(), BoxError>>;

/// Hook called with a recovered message.
pub type MessageHook<'a> = Option<&'a mut dyn FnMut(&str) -> std::result::Result<(), BoxError>>;

fn run_hook<T: ?Sized>(
    hook: Option<&mut dyn FnMut(&T) -> std::result::Result<(), BoxError>>,
    value: &T,
) -> Result<()> {
    match hook {
        Some(hook) => hook(value).map_err(StegoError::Hook),
        None => Ok(()),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Hides `secret_path`'s top bit-plane in `cover_path` and writes a PNG.
pub fn embed_image(
    cover_path: &Path,
    secret_path: &Path,
    output: &OutputDir,
    policy: EqualSamplePolicy,
    on_done: PathHook<'_>,
) -> Result<PathBuf> {
    let cover = ImageStego::from_file(cover_path)?;
    let secret = ImageStego::from_file(secret_path)?;
    let stego = cover.embed_image(&secret, policy)?;

    let path = output.prepare(OutputKind::ImageStegano)?;
    stego.save(&path)?;
    info!(file = %file_name(&path), "secret image embedded within the cover image");

    run_hook(on_done, path.as_path())?;
    Ok(path)
}

/// Recovers the hidden bit-plane of `stego_path` and writes it as a PNG.
pub fn extract_image(stego_path: &Path, output: &OutputDir, on_done: PathHook<'_>) -> Result<PathBuf> {
    let stego = ImageStego::from_file(stego_path)?;
    let secret = stego.extract_image();

    let path = output.prepare(OutputKind::ExtractedImage)?;
    secret.save(&path)?;
    info!(file = %file_name(&path), "secret image extracted from stego image");

    run_hook(on_done, path.as_path())?;
    Ok(path)
}

/// Hides `message` in the image at `cover_path` and writes a PNG.
pub fn embed_image_message(
    cover_path: &Path,
    message: &str,
    output: &OutputDir,
    on_done: PathHook<'_>,
) -> Result<PathBuf> {
    let cover = ImageStego::from_file(cover_path)?;
    let stego = cover.hide_message(message)?;

    let path = output.prepare(OutputKind::MessageStegano)?;
    stego.save(&path)?;
    info!(file = %file_name(&path), "secret message embedded in image");

    run_hook(on_done, path.as_path())?;
    Ok(path)
}

/// Recovers the message hidden in the image at `stego_path`.
pub fn extract_image_message(stego_path: &Path, on_done: MessageHook<'_>) -> Result<String> {
    let stego = ImageStego::from_file(stego_path)?;
    let message = stego.extract_message()?;
    info!(chars = char_len(&message), "hidden message recovered from image");

    run_hook(on_done, message.as_str())?;
    Ok(message)
}

/// Hides `message` in the WAV file at `cover_path` and writes a WAV with the
/// same format parameters.
pub fn embed_audio_message(
    cover_path: &Path,
    message: &str,
    output: &OutputDir,
    on_done: PathHook<'_>,
) -> Result<PathBuf> {
    let cover = AudioStego::from_file(cover_path)?;
    let stego = cover.hide_message(message)?;

    let path = output.prepare(OutputKind::AudioStegano)?;
    stego.save(&path)?;
    info!(file = %file_name(&path), "secret message embedded in audio");

    run_hook(on_done, path.as_path())?;
    Ok(path)
}

/// Recovers the message hidden in the WAV file at `stego_path`.
pub fn extract_audio_message(stego_path: &Path, on_done: MessageHook<'_>) -> Result<String> {
    let stego = AudioStego::from_file(stego_path)?;
    let message = stego.extract_message()?;
    info!(chars = char_len(&message), "hidden message recovered from audio");

    run_hook(on_done, message.as_str())?;
    Ok(message)
}

/// Carrier media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierKind {
    Image,
    Audio,
}

impl CarrierKind {
    /// Guesses the kind from the file extension: `.wav` is audio, anything
    /// else is treated as an image.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("wav") => Self::Audio,
            _ => Self::Image,
        }
    }
}

impl FromStr for CarrierKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            other => Err(format!("unknown carrier kind '{other}' (expected image or audio)")),
        }
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// How much a carrier can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierCapacity {
    pub kind: CarrierKind,
    /// Samples (image channels or audio bytes), including the length cell.
    pub samples: usize,
    /// Longest message that fits, in characters.
    pub message_chars: usize,
    /// Image shape as `(rows, columns, channels)`; `None` for audio.
    pub shape: Option<(usize, usize, usize)>,
}

/// Reports the message capacity of the carrier at `path`.
pub fn capacity(path: &Path, kind: CarrierKind) -> Result<CarrierCapacity> {
    match kind {
        CarrierKind::Image => {
            let image = ImageStego::from_file(path)?;
            Ok(CarrierCapacity {
                kind,
                samples: image.samples().len(),
                message_chars: image.message_capacity(),
                shape: Some(image.shape()),
            })
        }
        CarrierKind::Audio => {
            let audio = AudioStego::from_file(path)?;
            Ok(CarrierCapacity {
                kind,
                samples: audio.bytes().len(),
                message_chars: audio.message_capacity(),
                shape: None,
            })
        }
    }
}
