//! Steganography module for hiding data in carriers.
//!
//! Supports:
//! - Image LSB steganography (image in image, message in image)
//! - Audio LSB steganography (message in WAV)
//!
//! Both message codecs share the one-byte length framing in [`frame`].

pub mod audio;
pub mod frame;
pub mod image;

pub use self::audio::AudioStego;
pub use self::frame::{LengthPrefix, PrefixUnit};
pub use self::image::{EqualSamplePolicy, ImageStego};
