//! A software implementation of the MD5 message digest (RFC 1321). The whole message is digested in one call and the
//! digest is returned as a lowercase hexadecimal string.
//!
//! ```
//! use rfc1321::{compute_digest, try_compute_digest, Md5Config};
//!
//! assert_eq!(compute_digest(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(
//!     try_compute_digest(b"message digest", &Md5Config::strict()).unwrap(),
//!     "f96b697d7cb7938d525a2f31aaf161d0"
//! );
//! ```
//!
//! The padded message only stores the low 32 bits of the message bit length, so messages of 512 MiB and more are
//! digested with a truncated length field by default. Use `Md5Config::strict` to reject them instead.

pub mod array_util;
pub mod config;
pub mod error;
pub mod hash;

pub use crate::config::{LengthPolicy, Md5Config};
pub use crate::error::{Md5Error, Result};
pub use crate::hash::md5::MD5Hash;
pub use crate::hash::{HashFunction, HashValue};

/// Compute the MD5 digest of ``input`` as a 32 character lowercase hexadecimal string. Bit lengths beyond 32 bits are
/// silently truncated.
pub fn compute_digest(input: &[u8]) -> String {
    MD5Hash::digest_message(input).to_hex()
}

/// Compute the MD5 digest of ``input`` as a 32 character lowercase hexadecimal string under the given configuration.
///
/// # Errors
/// Returns `Md5Error::InputTooLarge` if the length of ``input`` cannot be represented and ``config`` rejects such inputs.
pub fn try_compute_digest(input: &[u8], config: &Md5Config) -> Result<String> {
    MD5Hash::digest_with(config, input).map(|hash| hash.to_hex())
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::Rng;

    use super::*;

    pub const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    pub const LONG_TEXT: &str = "God? You'd assert that a God exhibits neither shame nor despair. And yet I stand unchanged; \
a tragic husk with bloodied hands. I surrendered my future, the prospect of a family to carry your poison. \
You misled me. I renounce your control! \
Fidelity has always been your greatest quality, Ragnier. I swear to you to my son, all of your shame and guilt, \
all of your sins, they will collapse into the abyss we all race towards. Share that truth with the world, share it \
with the provinces and the valley and the empires in the west. Show them your conviction, \
show them the serenity of the void.";

    /// test suite of RFC 1321, appendix A.5
    pub const RFC_1321_SUITE: [(&str, &str); 7] = [
        ("", "d41d8cd98f00b204e9800998ecf8427e"),
        ("a", "0cc175b9c0f1b6a831c399e269772661"),
        ("abc", "900150983cd24fb0d6963f7d28e17f72"),
        ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
        ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
        ("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", "d174ab98d277d9f5a5611c2c9f419d9f"),
        (
            "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            "57edf4a22be3c955ac49da2e2107b67a",
        ),
    ];

    /// digests of messages consisting of the given number of ``a`` characters
    pub const BLOCK_EDGE_VECTORS: [(usize, &str); 7] = [
        (55, "ef1772b6dff9a122358552954ad0df65"),
        (56, "3b0c8ac703f828b04c6c197006d17218"),
        (63, "b06521f39153d618550606be297466d5"),
        (64, "014842d480b571495a4a0363793f7367"),
        (65, "c743a45e0d2e6a95cb859adae0248435"),
        (119, "8a7bd0732ed6a28ce75f6dabc90e1613"),
        (120, "5f61c0ccad4cac44c75ff505e1f1e537"),
    ];

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_compute_digest() {
        for (message, digest) in RFC_1321_SUITE.iter() {
            assert_eq!(compute_digest(message.as_bytes()), *digest);
        }
        assert_eq!(compute_digest(FOX), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_compute_digest_block_edges() {
        for (length, digest) in BLOCK_EDGE_VECTORS.iter() {
            assert_eq!(compute_digest(&vec![b'a'; *length]), *digest, "length {}", length);
        }
    }

    #[test]
    fn test_try_compute_digest() {
        for config in [Md5Config::default(), Md5Config::strict()].iter() {
            for (message, digest) in RFC_1321_SUITE.iter() {
                assert_eq!(try_compute_digest(message.as_bytes(), config), Ok(digest.to_string()));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for (message, _) in RFC_1321_SUITE.iter() {
            assert_eq!(compute_digest(message.as_bytes()), compute_digest(message.as_bytes()));
        }
        assert_eq!(compute_digest(LONG_TEXT.as_bytes()), compute_digest(LONG_TEXT.as_bytes()));
    }

    #[test]
    fn test_fixed_length_lowercase_hex() {
        for length in 0..200 {
            let digest = compute_digest(&vec![0xA5u8; length]);
            assert_eq!(digest.len(), 32);
            assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)), "{}", digest);
        }
    }

    #[test]
    fn test_avalanche() {
        let digest = hex::decode(compute_digest(FOX)).unwrap();

        for index in 0..FOX.len() {
            for bit in 0..8 {
                let mut flipped = FOX.to_vec();
                flipped[index] ^= 1 << bit;

                let flipped_digest = hex::decode(compute_digest(&flipped)).unwrap();
                let differing_bits: u32 = digest.iter()
                    .zip(flipped_digest.iter())
                    .map(|(a, b)| (a ^ b).count_ones())
                    .sum();

                assert!(differing_bits >= 32, "byte {} bit {} changed only {} bits", index, bit, differing_bits);
            }
        }
    }

    #[test]
    fn test_random_messages() {
        let mut rng = rand::thread_rng();
        let random_data = (0..1000).map(|_| rng.gen::<u8>()).collect::<Vec<u8>>();

        for _ in 0..100 {
            let length = rng.gen_range(0, random_data.len());
            let data = &random_data[..length];
            assert_eq!(
                compute_digest(data),
                format!("{:x}", reference_md5::compute(data)),
                "failed for data length: {}",
                length
            );
        }
    }
}
