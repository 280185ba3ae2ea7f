//! Binary hash tree over ordered records
//!
//! - Leaves hash one record each
//! - Internal nodes hash the concatenated hex digests of their children
//! - Odd lists are evened out with a phantom copy of their last element
//! - The root digest fingerprints the whole ordered input

mod builder;
mod dump;
mod entity;

pub use builder::{TreeBuilder, TreeShape};
pub use dump::{node_views, render, write_dump, NodeView};
pub use entity::{EntityId, MerkleTree, TreeEntity, Walk};
