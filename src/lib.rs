//! # lsb-stego - LSB steganography for images and audio
//!
//! Hides a secret image or a short text message inside a carrier by
//! overwriting the least significant bit of its samples, and recovers it
//! again.
//!
//! ## Codecs
//!
//! - **Image in image**: each RGB sample of the cover keeps its upper 7 bits
//!   and takes the top bit of the secret's sample as its LSB. Extraction
//!   yields a black and white rendering of that bit-plane.
//! - **Message in image**: message bits (8 per character, MSB first) fill the
//!   LSBs of the first samples in raster order; the character count lives in
//!   the last sample.
//! - **Message in audio**: message bits fill the LSBs of the first PCM bytes;
//!   the bit count lives in the final byte.
//!
//! Messages are limited to characters with code points 0-255 and to what a
//! one-byte length prefix can express.
//!
//! ## Example Usage
//!
//! ```rust
//! use image::{ImageBuffer, Rgb};
//! use lsb_stego::ImageStego;
//!
//! let cover = ImageStego::from_rgb(ImageBuffer::from_pixel(8, 8, Rgb([120, 64, 33])));
//!
//! let stego = cover.hide_message("Hi").unwrap();
//! assert_eq!(stego.extract_message().unwrap(), "Hi");
//! ```
//!
//! ## Modules
//!
//! - [`bits`]: message to bit-sequence packing
//! - [`stego`]: the image and audio codecs and the length framing
//! - [`ops`]: file-level operations writing to an [`OutputDir`]
//! - [`config`]: TOML configuration
//! - [`output`]: output file naming

pub mod bits;
pub mod config;
pub mod error;
pub mod ops;
pub mod output;
pub mod stego;

// Re-export commonly used types at the crate root
pub use bits::{bits_to_string, string_to_bits};
pub use config::{ConfigError, StegoConfig};
pub use error::{BoxError, Result, StegoError};
pub use ops::{
    capacity, embed_audio_message, embed_image, embed_image_message, extract_audio_message,
    extract_image, extract_image_message, CarrierCapacity, CarrierKind,
};
pub use output::{OutputDir, OutputKind};
pub use stego::{AudioStego, EqualSamplePolicy, ImageStego, LengthPrefix, PrefixUnit};
