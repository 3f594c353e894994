//! LSB steganography for audio files.
//!
//! Hides a message in the least significant bits of the raw PCM byte stream
//! of a WAV file, the same bytes a WAV `data` chunk stores on disk.
//!
//! Format: message bits in the LSBs of bytes `0..bit_count`, and the bit
//! count itself in the final byte. The final byte is overwritten, so that
//! one sample byte is lost as audio.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use tracing::debug;

use crate::bits::{bits_to_string, string_to_bits, BITS_PER_CHAR};
use crate::error::{Result, StegoError};
use crate::stego::frame::{LengthPrefix, PrefixUnit, MAX_PREFIX};

/// Audio steganography handler.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioStego {
    /// Audio specification (sample rate, channels, bit depth, format)
    spec: WavSpec,
    /// Little-endian sample bytes, interleaved by channel
    bytes: Vec<u8>,
}

impl AudioStego {
    /// Creates a new AudioStego from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = WavReader::open(path)?;
        Self::from_reader(reader)
    }

    /// Creates a new AudioStego from WAV bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = WavReader::new(Cursor::new(bytes))?;
        Self::from_reader(reader)
    }

    /// Creates an AudioStego from a spec and raw sample bytes.
    pub fn from_parts(spec: WavSpec, bytes: Vec<u8>) -> Result<Self> {
        let width = SampleLayout::of(&spec)?.width();
        if bytes.len() % width != 0 {
            return Err(StegoError::UnsupportedFormat(format!(
                "{} bytes is not a whole number of {}-byte samples",
                bytes.len(),
                width
            )));
        }
        Ok(Self { spec, bytes })
    }

    /// Creates AudioStego from a WavReader.
    fn from_reader<R: Read + Seek>(reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let layout = SampleLayout::of(&spec)?;
        let mut bytes = Vec::with_capacity(reader.len() as usize * layout.width());

        match layout {
            SampleLayout::U8 => {
                // hound centers 8-bit PCM around zero; the file stores it unsigned.
                for sample in reader.into_samples::<i8>() {
                    bytes.push((sample? as u8) ^ 0x80);
                }
            }
            SampleLayout::I16 => {
                for sample in reader.into_samples::<i16>() {
                    bytes.extend_from_slice(&sample?.to_le_bytes());
                }
            }
            SampleLayout::I24 => {
                for sample in reader.into_samples::<i32>() {
                    bytes.extend_from_slice(&sample?.to_le_bytes()[..3]);
                }
            }
            SampleLayout::I32 => {
                for sample in reader.into_samples::<i32>() {
                    bytes.extend_from_slice(&sample?.to_le_bytes());
                }
            }
            SampleLayout::F32 => {
                for sample in reader.into_samples::<f32>() {
                    bytes.extend_from_slice(&sample?.to_le_bytes());
                }
            }
        }

        Ok(Self { spec, bytes })
    }

    /// Maximum payload size in bits.
    ///
    /// Bounded by the one-byte prefix and by the bytes left once the final
    /// length byte is reserved.
    pub fn bit_capacity(&self) -> usize {
        LengthPrefix::reserved_index(self.bytes.len())
            .map(|payload_bytes| payload_bytes.min(MAX_PREFIX))
            .unwrap_or(0)
    }

    /// Maximum message length in characters.
    pub fn message_capacity(&self) -> usize {
        self.bit_capacity() / BITS_PER_CHAR
    }

    /// Hides a message in the audio using LSB steganography.
    ///
    /// # Returns
    /// A new AudioStego with the message hidden inside and the same format.
    pub fn hide_message(&self, message: &str) -> Result<Self> {
        let bits = string_to_bits(message)?;
        let capacity = self.bit_capacity();
        if bits.len() > capacity || self.bytes.is_empty() {
            return Err(StegoError::PayloadTooLarge {
                needed: bits.len(),
                capacity,
            });
        }

        let prefix = LengthPrefix::new(PrefixUnit::Bits, bits.len())?;
        let mut new_bytes = self.bytes.clone();

        for (byte, bit) in new_bytes.iter_mut().zip(&bits) {
            *byte = (*byte & 0xFE) | bit;
        }
        prefix.write(&mut new_bytes);

        debug!(bits = bits.len(), capacity, "embedded message in audio");
        Ok(Self {
            spec: self.spec,
            bytes: new_bytes,
        })
    }

    /// Extracts a hidden message from the audio.
    pub fn extract_message(&self) -> Result<String> {
        let prefix = LengthPrefix::read(PrefixUnit::Bits, &self.bytes).ok_or(
            StegoError::TruncatedPayload {
                needed: 1,
                available: 0,
            },
        )?;

        let needed = prefix.bit_count();
        let available = self.bytes.len() - 1;
        if needed > available {
            return Err(StegoError::TruncatedPayload { needed, available });
        }

        debug!(bits = needed, "reading message from audio");
        let bits: Vec<u8> = self.bytes[..needed].iter().map(|byte| byte & 1).collect();
        bits_to_string(&bits)
    }

    /// Saves the audio to a WAV file with the original format parameters.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = WavWriter::create(path, self.spec)?;
        self.write_samples(writer)
    }

    /// Returns the audio as WAV bytes.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let writer = WavWriter::new(Cursor::new(&mut bytes), self.spec)?;
            self.write_samples(writer)?;
        }
        Ok(bytes)
    }

    fn write_samples<W: Write + Seek>(&self, mut writer: WavWriter<W>) -> Result<()> {
        let layout = SampleLayout::of(&self.spec)?;

        for chunk in self.bytes.chunks_exact(layout.width()) {
            match layout {
                SampleLayout::U8 => writer.write_sample((chunk[0] ^ 0x80) as i8)?,
                SampleLayout::I16 => writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?,
                SampleLayout::I24 => {
                    let sign = if chunk[2] & 0x80 != 0 { 0xFF } else { 0x00 };
                    writer.write_sample(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], sign]))?
                }
                SampleLayout::I32 => writer
                    .write_sample(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))?,
                SampleLayout::F32 => writer
                    .write_sample(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))?,
            }
        }

        writer.finalize()?;
        Ok(())
    }

    /// Returns the audio specification.
    pub fn spec(&self) -> &WavSpec {
        &self.spec
    }

    /// Raw sample bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        let sample_bytes = usize::from(self.spec.bits_per_sample).div_ceil(8);
        let frame_bytes = usize::from(self.spec.channels) * sample_bytes;
        if frame_bytes == 0 {
            return 0;
        }
        self.bytes.len() / frame_bytes
    }
}

/// On-disk layout of one sample, for the formats the codec can flatten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleLayout {
    U8,
    I16,
    I24,
    I32,
    F32,
}

impl SampleLayout {
    fn of(spec: &WavSpec) -> Result<Self> {
        match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 8) => Ok(Self::U8),
            (SampleFormat::Int, 16) => Ok(Self::I16),
            (SampleFormat::Int, 24) => Ok(Self::I24),
            (SampleFormat::Int, 32) => Ok(Self::I32),
            (SampleFormat::Float, 32) => Ok(Self::F32),
            (format, bits) => Err(StegoError::UnsupportedFormat(format!(
                "{bits}-bit {format:?} PCM"
            ))),
        }
    }

    /// Bytes per sample.
    fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I24 => 3,
            Self::I32 | Self::F32 => 4,
        }
    }
}

/// Creates a simple test WAV audio.
#[cfg(test)]
fn create_test_audio(sample_count: usize) -> AudioStego {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    // Generate a simple sine wave
    let bytes: Vec<u8> = (0..sample_count)
        .flat_map(|i| {
            let t = i as f64 / 44100.0;
            let freq = 440.0; // A4 note
            ((f64::sin(2.0 * std::f64::consts::PI * freq * t) * 16000.0) as i16).to_le_bytes()
        })
        .collect();

    AudioStego { spec, bytes }
}
