//! # hashroot
//!
//! Integrity digests over ordered text records.
//!
//! Records become the leaves of a binary hash tree that is combined by
//! recursive halving into a single root digest. Persisting that digest and
//! comparing it on the next run detects any change to the record set.
//!
//! ## Core Concepts
//!
//! - **HashFunction**: pluggable digest rendered as lowercase hex
//! - **TreeEntity**: node with digest, audit-trail content and phantom flag
//! - **TreeBuilder**: ordered records → [`MerkleTree`]
//! - **IntegrityStore**: load/save of the last accepted root digest
//! - **check**: `Approved`, `Tampered` or `FirstRun`
//!
//! ## Example
//!
//! ```
//! use hashroot::{check, MemoryStore, Sha256Hash, Status, TreeBuilder};
//!
//! let tree = TreeBuilder::new(&Sha256Hash).build(&["alpha", "beta"])?;
//! let store = MemoryStore::new();
//! assert_eq!(check(tree.root_digest(), &store)?.status, Status::FirstRun);
//! assert_eq!(check(tree.root_digest(), &store)?.status, Status::Approved);
//! # Ok::<(), hashroot::Error>(())
//! ```

pub mod check;
pub mod config;
pub mod hashing;
pub mod input;
pub mod store;
pub mod tree;

mod error;

pub use check::{check, Status, Verdict};
pub use config::Config;
pub use error::{Error, Result};
pub use hashing::{Blake3Hash, HashAlgorithm, HashConfig, HashFunction, Sha256Hash};
pub use store::{FileStore, IntegrityStore, MemoryStore};
pub use tree::{EntityId, MerkleTree, TreeBuilder, TreeEntity, TreeShape};
