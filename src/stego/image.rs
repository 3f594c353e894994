//! LSB (Least Significant Bit) steganography for images.
//!
//! The carrier is viewed as a pixel grid of `rows x columns x 3` RGB samples
//! walked in raster order (row, then column, then channel). Two payloads are
//! supported:
//!
//! - **Image in image**: every sample's LSB is replaced with the top bit of
//!   the secret image's sample at the same position. Extraction renders each
//!   recovered bit as full black or full white.
//! - **Message in image**: message bits go into the LSBs of the first samples
//!   and a one-byte character count goes into the last sample.
//!
//! Only lossless formats survive a round trip; output is always PNG.

use clap::ValueEnum;
use image::{DynamicImage, ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::bits::{bits_to_string, char_len, string_to_bits, BITS_PER_CHAR};
use crate::error::{Result, Shape, StegoError};
use crate::stego::frame::{LengthPrefix, PrefixUnit, MAX_PREFIX};

/// Color channels used per pixel.
pub const CHANNELS: usize = 3;

/// How image-in-image embedding treats samples that already equal the secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum EqualSamplePolicy {
    /// Apply the substitution to every sample.
    #[default]
    Substitute,
    /// Leave samples that equal the secret untouched, even when the cover's
    /// LSB differs from the secret's top bit.
    Skip,
}

/// Image steganography handler over an 8-bit RGB pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStego {
    image: RgbImage,
}

impl ImageStego {
    /// Creates a new ImageStego from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path)?;
        Ok(Self::from_image(image))
    }

    /// Creates a new ImageStego from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(image))
    }

    /// Creates a new ImageStego from a DynamicImage.
    ///
    /// Any color type is converted to 8-bit RGB; an alpha channel is dropped.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    /// Creates a new ImageStego from an RGB buffer.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    /// Grid shape as `(rows, columns, channels)`.
    pub fn shape(&self) -> Shape {
        let (width, height) = self.image.dimensions();
        (height as usize, width as usize, CHANNELS)
    }

    /// Samples in raster order.
    pub fn samples(&self) -> &[u8] {
        &self.image
    }

    /// Maximum message length in characters.
    ///
    /// The last sample holds the length prefix, so it never carries payload.
    pub fn message_capacity(&self) -> usize {
        LengthPrefix::reserved_index(self.samples().len())
            .map(|payload_samples| (payload_samples / BITS_PER_CHAR).min(MAX_PREFIX))
            .unwrap_or(0)
    }

    /// Hides the top bit-plane of `secret` in this image.
    ///
    /// Both images must have the same shape.
    pub fn embed_image(&self, secret: &ImageStego, policy: EqualSamplePolicy) -> Result<Self> {
        let (cover_shape, secret_shape) = (self.shape(), secret.shape());
        if cover_shape != secret_shape {
            return Err(StegoError::DimensionMismatch {
                cover: cover_shape,
                secret: secret_shape,
            });
        }

        let mut output = self.image.clone();
        let stego: &mut [u8] = &mut output;
        let mut changed = 0usize;

        for ((out, &cover), &hidden) in stego.iter_mut().zip(self.samples()).zip(secret.samples()) {
            if policy == EqualSamplePolicy::Skip && cover == hidden {
                continue;
            }
            *out = (cover & 0xFE) | (hidden >> 7);
            if *out != cover {
                changed += 1;
            }
        }

        debug!(?cover_shape, ?policy, changed, "embedded secret image bit-plane");
        Ok(Self { image: output })
    }

    /// Recovers the hidden bit-plane as a black and white image.
    pub fn extract_image(&self) -> Self {
        let mut output = self.image.clone();
        let samples: &mut [u8] = &mut output;
        for sample in samples.iter_mut() {
            *sample = (*sample & 1) * 255;
        }
        Self { image: output }
    }

    /// Hides a message in this image.
    ///
    /// Samples past the payload keep their cover value, except the last
    /// sample, which receives the character count.
    pub fn hide_message(&self, message: &str) -> Result<Self> {
        let len = char_len(message);
        let capacity = self.message_capacity();
        if len > capacity || self.samples().is_empty() {
            return Err(StegoError::PayloadTooLarge {
                needed: len,
                capacity,
            });
        }

        let prefix = LengthPrefix::new(PrefixUnit::Characters, len)?;
        let bits = string_to_bits(message)?;

        let mut output = self.image.clone();
        let stego: &mut [u8] = &mut output;

        for (sample, bit) in stego.iter_mut().zip(&bits) {
            *sample = (*sample & 0xFE) | bit;
        }
        // Written last so payload bits can never clobber it.
        prefix.write(stego);

        debug!(chars = len, bits = bits.len(), capacity, "embedded message in image");
        Ok(Self { image: output })
    }

    /// Extracts a hidden message from this image.
    pub fn extract_message(&self) -> Result<String> {
        let samples = self.samples();
        let prefix = LengthPrefix::read(PrefixUnit::Characters, samples).ok_or(
            StegoError::TruncatedPayload {
                needed: 1,
                available: 0,
            },
        )?;

        let needed = prefix.bit_count();
        let available = samples.len() - 1;
        if needed > available {
            return Err(StegoError::TruncatedPayload { needed, available });
        }

        debug!(chars = prefix.value(), bits = needed, "reading message from image");
        let bits: Vec<u8> = samples[..needed].iter().map(|sample| sample & 1).collect();
        bits_to_string(&bits)
    }

    /// Saves the image to a file as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Returns a reference to the underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes self and returns the underlying image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
