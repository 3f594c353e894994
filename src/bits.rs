//! Bit packing between messages and flat bit sequences.
//!
//! Every character becomes 8 bits, most significant bit first, and the
//! groups are concatenated in message order. Only code points 0-255 are
//! representable; anything wider is rejected instead of truncated.

use crate::error::{Result, StegoError};

/// Number of bits used for one character.
pub const BITS_PER_CHAR: usize = 8;

/// Converts a message into its bit sequence (one `0`/`1` per element).
pub fn string_to_bits(message: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(char_len(message) * BITS_PER_CHAR);

    for (position, character) in message.chars().enumerate() {
        let code = u8::try_from(u32::from(character))
            .map_err(|_| StegoError::UnsupportedCharacter { character, position })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((code >> shift) & 1);
        }
    }

    Ok(bits)
}

/// Converts a bit sequence back into a message.
///
/// The sequence length must be a multiple of 8 and every element must be
/// `0` or `1`.
pub fn bits_to_string(bits: &[u8]) -> Result<String> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(StegoError::MalformedPayload(format!(
            "bit count {} is not a multiple of {}",
            bits.len(),
            BITS_PER_CHAR
        )));
    }

    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| {
            group.iter().try_fold(0u8, |acc, &bit| {
                if bit > 1 {
                    return Err(StegoError::MalformedPayload(format!("invalid bit value {bit}")));
                }
                Ok((acc << 1) | bit)
            })
        })
        .map(|code| code.map(char::from))
        .collect()
}

/// Number of characters in a message, as counted by the length prefix.
pub fn char_len(message: &str) -> usize {
    message.chars().count()
}
