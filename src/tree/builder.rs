//! Tree construction by recursive halving
//!
//! Every list is padded to even length with a phantom copy of its last
//! element before it is split or combined, at every level, not only at the
//! leaves. For sizes that are not powers of two this gives a different
//! shape than level-by-level pairwise folding.

use super::entity::{EntityId, MerkleTree, TreeEntity};
use crate::hashing::HashFunction;
use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How sublists relate to each other while halving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeShape {
    /// Each half is an independent list that pads itself
    #[default]
    Halving,
    /// Halves are windows onto one shared list. Padding inside a left half
    /// inserts into that list, shifting the left half's tail into its right
    /// sibling and growing every enclosing window. Matches digests written
    /// by older tooling.
    Compat,
}

impl TreeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeShape::Halving => "halving",
            TreeShape::Compat => "compat",
        }
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halving" => Ok(TreeShape::Halving),
            "compat" => Ok(TreeShape::Compat),
            other => Err(Error::Config(format!(
                "unknown tree shape '{}' (available: halving, compat)",
                other
            ))),
        }
    }
}

/// Builds a [`MerkleTree`] from ordered records
pub struct TreeBuilder<'h> {
    hasher: &'h dyn HashFunction,
    shape: TreeShape,
}

impl<'h> TreeBuilder<'h> {
    pub fn new(hasher: &'h dyn HashFunction) -> Self {
        TreeBuilder {
            hasher,
            shape: TreeShape::default(),
        }
    }

    pub fn with_shape(mut self, shape: TreeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Build the tree over `values`, in order
    ///
    /// Fails with [`Error::EmptyInput`] when there is nothing to hash.
    pub fn build<S: AsRef<str>>(&self, values: &[S]) -> Result<MerkleTree> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!(records = values.len(), shape = %self.shape, hash = self.hasher.name(), "building tree");

        let mut arena = Arena::new(self.hasher, values.len());
        let mut leaves: Vec<EntityId> = values.iter().map(|v| arena.leaf(v.as_ref())).collect();
        pad_tail(&mut arena, &mut leaves);

        let root = match self.shape {
            TreeShape::Halving => arena.combine_halving(leaves),
            TreeShape::Compat => {
                let end = leaves.len();
                arena.combine_compat(&mut leaves, 0, end).0
            }
        };

        let tree = MerkleTree::from_parts(arena.entities, root, values.len());
        debug!(
            entities = tree.entity_count(),
            phantoms = tree.phantom_count(),
            root = tree.root_digest(),
            "tree built"
        );
        Ok(tree)
    }
}

/// Append a phantom copy of the last node if `nodes` has odd length
fn pad_tail(arena: &mut Arena<'_>, nodes: &mut Vec<EntityId>) {
    if nodes.len() % 2 == 1 {
        if let Some(&last) = nodes.last() {
            let phantom = arena.phantom_of(last);
            nodes.push(phantom);
        }
    }
}

enum Step {
    Split(Vec<EntityId>),
    Join,
}

struct Arena<'h> {
    hasher: &'h dyn HashFunction,
    entities: Vec<TreeEntity>,
}

impl<'h> Arena<'h> {
    fn new(hasher: &'h dyn HashFunction, records: usize) -> Self {
        Arena {
            hasher,
            entities: Vec::with_capacity(records.saturating_mul(2)),
        }
    }

    fn push(&mut self, entity: TreeEntity) -> EntityId {
        self.entities.push(entity);
        EntityId::new(self.entities.len() - 1)
    }

    fn leaf(&mut self, value: &str) -> EntityId {
        let digest = self.hasher.hash_str(value);
        self.push(TreeEntity::leaf(digest, value.to_string()))
    }

    fn phantom_of(&mut self, source: EntityId) -> EntityId {
        let copy = self.entities[source.index()].phantom_copy();
        self.push(copy)
    }

    fn join(&mut self, left: EntityId, right: EntityId) -> EntityId {
        let (l, r) = (&self.entities[left.index()], &self.entities[right.index()]);
        let mut joined = String::with_capacity(l.digest().len() + r.digest().len());
        joined.push_str(l.digest());
        joined.push_str(r.digest());
        let digest = self.hasher.hash_str(&joined);
        let content = format!("{}+{}", l.content(), r.content());
        self.push(TreeEntity::internal(left, right, digest, content))
    }

    /// Independent-halves combine, driven by an explicit stack.
    ///
    /// Left halves are processed before right halves so entities are
    /// created in the same order a direct recursion would create them.
    fn combine_halving(&mut self, nodes: Vec<EntityId>) -> EntityId {
        let mut steps = vec![Step::Split(nodes)];
        let mut done: Vec<EntityId> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Split(mut nodes) => {
                    pad_tail(self, &mut nodes);
                    if nodes.len() == 2 {
                        let id = self.join(nodes[0], nodes[1]);
                        done.push(id);
                    } else {
                        let right = nodes.split_off(nodes.len() / 2);
                        steps.push(Step::Join);
                        steps.push(Step::Split(right));
                        steps.push(Step::Split(nodes));
                    }
                }
                Step::Join => {
                    let right = done.pop().expect("join follows two finished halves");
                    let left = done.pop().expect("join follows two finished halves");
                    let id = self.join(left, right);
                    done.push(id);
                }
            }
        }

        done.pop().expect("non-empty input yields a root")
    }

    /// Shared-window combine over `nodes[start..end]`.
    ///
    /// Returns the subtree root and how many phantoms were inserted into
    /// `nodes` while building it. Depth is logarithmic in the input size.
    /// Phantoms are inserted in place, shifting the tail of `nodes`, so the
    /// worst case is quadratic in the record count. Use `Halving` for large
    /// inputs.
    fn combine_compat(&mut self, nodes: &mut Vec<EntityId>, start: usize, end: usize) -> (EntityId, usize) {
        let mut end = end;
        let mut grown = 0;
        if (end - start) % 2 == 1 {
            let phantom = self.phantom_of(nodes[end - 1]);
            nodes.insert(end, phantom);
            end += 1;
            grown += 1;
        }

        let half = (end - start) / 2;
        if end - start == 2 {
            return (self.join(nodes[start], nodes[start + 1]), grown);
        }

        let (left, g) = self.combine_compat(nodes, start, start + half);
        end += g;
        grown += g;
        let (right, g) = self.combine_compat(nodes, start + half, end);
        grown += g;
        (self.join(left, right), grown)
    }
}
