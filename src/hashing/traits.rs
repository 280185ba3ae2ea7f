//! Hash function trait definition

/// A deterministic, collision-resistant one-way digest
///
/// Digests are rendered as lowercase hex, two characters per output byte,
/// in digest-byte order (`0x07` becomes `"07"`).
pub trait HashFunction: Send + Sync {
    /// Raw digest bytes for `data`
    fn digest(&self, data: &[u8]) -> Vec<u8>;

    /// Hex-encoded digest of `data`
    fn hash(&self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }

    /// Hex-encoded digest of a UTF-8 string
    fn hash_str(&self, text: &str) -> String {
        self.hash(text.as_bytes())
    }

    /// Digest length in bytes
    fn output_len(&self) -> usize;

    /// Algorithm identifier, e.g. `"blake3"`
    fn name(&self) -> &str;
}
