//! Tree entity and the arena that owns it

use std::fmt;
use std::ops::Index;

/// Index of an entity inside its [`MerkleTree`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    pub(crate) fn new(index: usize) -> Self {
        EntityId(index)
    }

    /// Position in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the hash tree
///
/// Leaves carry an input record as `content`. Internal entities carry the
/// `+`-joined content of both children, which makes `content` an audit
/// trail of which records contributed to the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntity {
    digest: String,
    content: String,
    children: Option<(EntityId, EntityId)>,
    phantom: bool,
}

impl TreeEntity {
    /// Create a leaf entity
    pub fn leaf(digest: String, content: String) -> Self {
        TreeEntity {
            digest,
            content,
            children: None,
            phantom: false,
        }
    }

    /// Create an internal entity over two children
    pub fn internal(left: EntityId, right: EntityId, digest: String, content: String) -> Self {
        TreeEntity {
            digest,
            content,
            children: Some((left, right)),
            phantom: false,
        }
    }

    /// Same digest, content and children, flagged as phantom
    ///
    /// Children are shared by index, not duplicated.
    pub fn phantom_copy(&self) -> Self {
        TreeEntity {
            phantom: true,
            ..self.clone()
        }
    }

    /// Hex digest of this node
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Record text (leaf) or joined child content (internal)
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn children(&self) -> Option<(EntityId, EntityId)> {
        self.children
    }

    pub fn left(&self) -> Option<EntityId> {
        self.children.map(|(l, _)| l)
    }

    pub fn right(&self) -> Option<EntityId> {
        self.children.map(|(_, r)| r)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// True only for entities synthesized to even out an odd list
    pub fn is_phantom(&self) -> bool {
        self.phantom
    }
}

/// A fully built hash tree
///
/// Entities live in one arena and refer to their children by [`EntityId`].
/// The tree is read-only once built.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    entities: Vec<TreeEntity>,
    root: EntityId,
    record_count: usize,
}

impl MerkleTree {
    pub(crate) fn from_parts(entities: Vec<TreeEntity>, root: EntityId, record_count: usize) -> Self {
        debug_assert!(root.index() < entities.len());
        MerkleTree {
            entities,
            root,
            record_count,
        }
    }

    pub fn root(&self) -> &TreeEntity {
        &self[self.root]
    }

    /// The integrity fingerprint of the whole input set
    pub fn root_digest(&self) -> &str {
        self.root().digest()
    }

    /// Number of input records the tree was built from
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of entities in the arena, phantoms included
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn phantom_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_phantom()).count()
    }

    /// All entities in arena (creation) order
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &TreeEntity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId::new(i), e))
    }

    /// Depth-first, left-before-right traversal from the root
    ///
    /// An entity reachable along two paths is yielded once per path.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(self.root, 0)],
        }
    }
}

impl Index<EntityId> for MerkleTree {
    type Output = TreeEntity;

    fn index(&self, id: EntityId) -> &TreeEntity {
        &self.entities[id.index()]
    }
}

/// Pre-order iterator returned by [`MerkleTree::walk`], yielding depth too
pub struct Walk<'a> {
    tree: &'a MerkleTree,
    stack: Vec<(EntityId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeEntity);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let tree = self.tree;
        let entity = &tree[id];
        if let Some((left, right)) = entity.children() {
            self.stack.push((right, depth + 1));
            self.stack.push((left, depth + 1));
        }
        Some((depth, entity))
    }
}
