//! Diagnostic listing of a built tree

use super::entity::MerkleTree;
use serde::Serialize;
use std::io::{self, Write};

/// Serializable view of one node, in traversal order
#[derive(Clone, Debug, Serialize)]
pub struct NodeView {
    pub depth: usize,
    pub digest: String,
    pub content: String,
    pub phantom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// Write every node depth-first, left before right
///
/// Internal nodes list their children's digests, leaves print `Entry`.
pub fn write_dump<W: Write>(tree: &MerkleTree, out: &mut W) -> io::Result<()> {
    for (_, entity) in tree.walk() {
        match entity.children() {
            Some((left, right)) => {
                writeln!(out, "Left: {}", tree[left].digest())?;
                writeln!(out, "Right: {}", tree[right].digest())?;
            }
            None => writeln!(out, "Entry")?,
        }
        if entity.is_phantom() {
            writeln!(out, "(phantom element)")?;
        }
        writeln!(out, "Value: {}", entity.digest())?;
        writeln!(out, "Content: {}", entity.content())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render(tree: &MerkleTree) -> String {
    let mut buf = Vec::new();
    // Vec<u8> sinks don't fail
    let _ = write_dump(tree, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn node_views(tree: &MerkleTree) -> Vec<NodeView> {
    tree.walk()
        .map(|(depth, entity)| NodeView {
            depth,
            digest: entity.digest().to_string(),
            content: entity.content().to_string(),
            phantom: entity.is_phantom(),
            left: entity.left().map(|id| tree[id].digest().to_string()),
            right: entity.right().map(|id| tree[id].digest().to_string()),
        })
        .collect()
}
