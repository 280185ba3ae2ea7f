//! Concrete digest algorithms and their startup-time resolution

use super::HashFunction;
use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// BLAKE3, 256-bit output
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hash;

impl HashFunction for Blake3Hash {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }

    fn output_len(&self) -> usize {
        blake3::OUT_LEN
    }

    fn name(&self) -> &str {
        "blake3"
    }
}

/// SHA-256, 256-bit output
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }

    fn output_len(&self) -> usize {
        32
    }

    fn name(&self) -> &str {
        "sha256"
    }
}

/// Algorithms that can back a [`HashFunction`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            other => Err(Error::HashUnavailable(format!(
                "unknown algorithm '{}' (available: blake3, sha256)",
                other
            ))),
        }
    }
}

/// Explicit hash configuration handed to whoever needs a [`HashFunction`]
///
/// Replaces any process-wide provider registration: callers resolve the
/// algorithm once and pass the resulting function down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashConfig {
    pub algorithm: HashAlgorithm,
}

impl HashConfig {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        HashConfig { algorithm }
    }

    /// Build a config from an algorithm name, failing with
    /// [`Error::HashUnavailable`] if the name is not known
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(HashConfig::new(name.parse()?))
    }

    /// Instantiate the configured hash function
    pub fn resolve(&self) -> Box<dyn HashFunction> {
        tracing::debug!(algorithm = %self.algorithm, "resolved hash function");
        match self.algorithm {
            HashAlgorithm::Blake3 => Box::new(Blake3Hash),
            HashAlgorithm::Sha256 => Box::new(Sha256Hash),
        }
    }
}
