//! Software implementation of the MD5 message digest of RFC 1321. The message is padded into a sequence of 16-word
//! blocks, which are compressed one after another into a four-word state.
//!
//! MD5 is broken with respect to collision resistance. It must only be used where a legacy system requires it.

use std::fmt;

use log::{debug, trace};

use crate::array_util::u32a_to_bytes_le;
use crate::config::Md5Config;
use crate::error::Result;
use crate::hash::{HashFunction, HashValue};

use self::constants::INITIAL;
use self::padding::{message_length_bits, truncated_length_bits, PaddedMessage};

mod compress;
pub mod constants;
pub mod padding;

/// the hash block length in bytes
const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// the digest length in bytes
const DIGEST_LENGTH_BYTES: usize = 16;

/// A tuple struct containing all four double-words of an MD5 hash state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MD5Hash(pub u32, pub u32, pub u32, pub u32);

impl MD5Hash {
    /// Digest a full message under the given configuration. A fresh state is initialized, the message is padded and
    /// every block is compressed into the state in order.
    ///
    /// # Errors
    /// Returns `Md5Error::InputTooLarge` if the configuration rejects messages whose bit length exceeds 32 bits.
    pub fn digest_with(config: &Md5Config, input: &[u8]) -> Result<Self> {
        Self::digest_with_length(config, input, input.len())
    }

    /// Digest ``input`` as if it were ``message_length`` bytes long. Only the length field is affected.
    fn digest_with_length(config: &Md5Config, input: &[u8], message_length: usize) -> Result<Self> {
        let length_bits = message_length_bits(message_length, config.length_policy)?;
        Ok(Self::digest_padded(message_length, &PaddedMessage::new(input, length_bits)))
    }

    fn digest_padded(message_length: usize, padded_message: &PaddedMessage) -> Self {
        debug!("computing MD5 hash of {} bytes in {} blocks", message_length, padded_message.block_count());

        let mut hash_state = INITIAL;
        for (block_index, block) in padded_message.blocks().enumerate() {
            hash_state.round_function(block);
            trace!("block {} digested, state is {:x?}", block_index, hash_state);
        }

        debug!("MD5 hash of {} bytes is {}", message_length, hash_state);
        hash_state
    }
}

impl HashFunction for MD5Hash {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = DIGEST_LENGTH_BYTES;

    /// Digest a full message of arbitrary size. Bit lengths beyond 32 bits are truncated like the legacy implementation
    /// does.
    fn digest_message(input: &[u8]) -> Self {
        let length_bits = truncated_length_bits(input.len());
        Self::digest_padded(input.len(), &PaddedMessage::new(input, length_bits))
    }
}

impl HashValue for MD5Hash {
    /// Generates a raw `[u8; 16]` array from the current hash state.
    fn raw(&self) -> Vec<u8> {
        u32a_to_bytes_le(&[self.0, self.1, self.2, self.3])
    }
}

impl fmt::Display for MD5Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
