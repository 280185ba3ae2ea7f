//! Pluggable digest functions
//!
//! Tree construction only ever talks to [`HashFunction`]; which algorithm
//! backs it is decided once, at startup, through a [`HashConfig`].

mod algorithms;
mod traits;

pub use algorithms::{Blake3Hash, HashAlgorithm, HashConfig, Sha256Hash};
pub use traits::HashFunction;
