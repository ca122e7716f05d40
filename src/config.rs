//! Configuration of a digest computation

/// How to treat inputs whose bit length does not fit into the 32-bit length field of the padded message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Keep only the low 32 bits of the bit length. Digests of such inputs differ from RFC 1321.
    Truncate,

    /// Fail with `Md5Error::InputTooLarge`.
    Reject,
}

/// Parameters of a digest computation. The default reproduces the legacy behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Md5Config {
    pub length_policy: LengthPolicy,
}

impl Md5Config {
    /// A configuration that rejects inputs of unrepresentable length instead of truncating it.
    pub fn strict() -> Self {
        Md5Config { length_policy: LengthPolicy::Reject }
    }

    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }
}

impl Default for Md5Config {
    fn default() -> Self {
        Md5Config { length_policy: LengthPolicy::Truncate }
    }
}
