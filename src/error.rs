//! Error types of the digest computation

use thiserror::Error;

/// Errors raised while computing a digest under a strict configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Md5Error {
    /// The bit length of the input does not fit into the 32-bit length field
    #[error("Input too large: {length} bytes do not fit into a 32-bit bit-length field")]
    InputTooLarge { length: usize },
}

/// Result type of all fallible operations in this crate
pub type Result<T> = std::result::Result<T, Md5Error>;
