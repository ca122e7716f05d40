use std::slice::ChunksExact;

use log::warn;

use crate::array_util::{align_to_u32a_le, or_byte_le};
use crate::config::LengthPolicy;
use crate::error::{Md5Error, Result};

use super::{BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};

/// size of the length field at the end of the padded message in bytes
const LENGTH_FIELD_BYTES: usize = 8;

/// Compute the value of the 32-bit length field for a message of ``length`` bytes. Only the low 32 bits of the bit
/// length are representable. Depending on ``policy`` the remaining bits are either dropped or an error is returned.
pub fn message_length_bits(length: usize, policy: LengthPolicy) -> Result<u32> {
    match (length as u64).checked_mul(8) {
        Some(length_bits) if length_bits <= u64::from(u32::MAX) => Ok(length_bits as u32),
        _ => match policy {
            LengthPolicy::Reject => Err(Md5Error::InputTooLarge { length }),
            LengthPolicy::Truncate => Ok(truncated_length_bits(length)),
        },
    }
}

/// The low 32 bits of the bit length of a message of ``length`` bytes. A warning is logged if higher bits are dropped.
pub fn truncated_length_bits(length: usize) -> u32 {
    let length_bits = (length as u64).wrapping_mul(8);
    if length_bits > u64::from(u32::MAX) || length_bits / 8 != length as u64 {
        warn!("message of {} bytes exceeds the 32-bit length field, its length is truncated", length);
    }

    length_bits as u32
}

/// A message padded to a multiple of the block length. The message bytes are packed into little endian words, followed
/// by a single 1-bit, zeroes and the message length in bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    words: Vec<u32>,
}

impl PaddedMessage {
    /// Pad ``input`` and write ``length_bits`` into the low word of the length field. The high word stays zero.
    pub fn new(input: &[u8], length_bits: u32) -> Self {
        let block_count = (input.len() + LENGTH_FIELD_BYTES) / BLOCK_LENGTH_BYTES + 1;
        let mut words = vec![0u32; block_count * BLOCK_LENGTH_DOUBLE_WORDS];

        // full words of the message
        let full_words = input.len() / 4;
        align_to_u32a_le(&mut words[..full_words], input);

        // the trailing message bytes that do not fill a whole word
        for (index, byte) in input.iter().enumerate().skip(full_words * 4) {
            or_byte_le(&mut words, index, *byte);
        }

        // append a single 1-bit to the end of the message
        or_byte_le(&mut words, input.len(), 0x80);

        let length_index = words.len() - 2;
        words[length_index] = length_bits;

        PaddedMessage { words }
    }

    /// The number of blocks the padded message consists of
    pub fn block_count(&self) -> usize {
        self.words.len() / BLOCK_LENGTH_DOUBLE_WORDS
    }

    /// Iterate over the blocks of the message in order. Every block is exactly ``BLOCK_LENGTH_DOUBLE_WORDS`` long.
    pub fn blocks(&self) -> ChunksExact<'_, u32> {
        self.words.chunks_exact(BLOCK_LENGTH_DOUBLE_WORDS)
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }
}
