pub mod md5;

/// Output of a `HashFunction`.
pub trait HashValue {
    /// Obtain the hash as a raw byte array.
    fn raw(&self) -> Vec<u8>;

    /// Obtain the hash as a lowercase hexadecimal string without any prefix or separators.
    fn to_hex(&self) -> String {
        hex::encode(self.raw())
    }
}

/// Any hash function that can digest arbitrarily sized input in one call.
pub trait HashFunction: HashValue + Sized {
    /// The digestion block size of this hash function in bytes
    const BLOCK_SIZE: usize;

    /// The size of the output hash in bytes
    const OUTPUT_SIZE: usize;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the final hash of the digested input data. It cannot be used to append more data, as the message
    /// length was appended to the input data for digestion.
    fn digest_message(input: &[u8]) -> Self;
}
