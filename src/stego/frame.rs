//! Length-prefix framing.
//!
//! Message payloads carry a single unsigned byte that records their length.
//! The byte lives in the last sample of the carrier, replacing that sample
//! entirely, and is never part of the payload bit range.
//!
//! Format version 1:
//! - images count the prefix in characters
//! - audio counts the prefix in bits

use crate::error::{Result, StegoError};

/// Version of the framing layout described above.
///
/// Format metadata only: the carrier holds no version field, so a reader
/// cannot detect it and must assume this layout.
pub const FRAME_VERSION: u8 = 1;

/// Largest value a one-byte prefix can hold.
pub const MAX_PREFIX: usize = u8::MAX as usize;

/// What the prefix value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixUnit {
    /// Number of 8-bit characters (image carriers).
    Characters,
    /// Number of payload bits (audio carriers).
    Bits,
}

impl PrefixUnit {
    /// Number of payload bits one prefix unit stands for.
    pub fn bits_per_unit(self) -> usize {
        match self {
            Self::Characters => 8,
            Self::Bits => 1,
        }
    }
}

/// One-byte length header stored in the reserved last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPrefix {
    unit: PrefixUnit,
    value: u8,
}

impl LengthPrefix {
    /// Builds a header for `len` units, failing if it does not fit in a byte.
    pub fn new(unit: PrefixUnit, len: usize) -> Result<Self> {
        let value = u8::try_from(len).map_err(|_| StegoError::PayloadTooLarge {
            needed: len,
            capacity: MAX_PREFIX,
        })?;
        Ok(Self { unit, value })
    }

    /// Reads the header from the reserved sample of `samples`.
    ///
    /// Returns `None` when the carrier has no samples at all.
    pub fn read(unit: PrefixUnit, samples: &[u8]) -> Option<Self> {
        samples.last().map(|&value| Self { unit, value })
    }

    /// Writes the header into the reserved sample of `samples`.
    ///
    /// Does nothing on an empty carrier; callers check capacity first.
    pub fn write(&self, samples: &mut [u8]) {
        if let Some(last) = samples.last_mut() {
            *last = self.value;
        }
    }

    /// Index of the reserved sample in a carrier of `sample_count` samples.
    pub fn reserved_index(sample_count: usize) -> Option<usize> {
        sample_count.checked_sub(1)
    }

    /// Raw prefix value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Unit the value is counted in.
    pub fn unit(&self) -> PrefixUnit {
        self.unit
    }

    /// Number of payload bits the header announces.
    pub fn bit_count(&self) -> usize {
        usize::from(self.value) * self.unit.bits_per_unit()
    }
}
