//! Structural diff between two constructed trees.
//!
//! Works the way a differential renderer does: compare the new tree
//! against the previous one, skip whatever is unchanged, and collect only
//! the edits. Patches are addressed by node id (with child positions for
//! list edits) and carry owned subtrees where new content appears.
//!
//! # Ordering
//!
//! For one parent, patches come out as: removals (child index descending,
//! so earlier removals never invalidate later ones), then moves and
//! inserts (target position ascending), then the recursion into surviving
//! pairs. A patch stream for a whole diff is self-contained for the
//! transition old -> new when applied in order.

use bitflags::bitflags;
use tracing::trace;

use serde::Serialize;

use crate::node::{Node, NodeData};
use crate::types::Props;

// =============================================================================
// Change summary
// =============================================================================

bitflags! {
    /// How one node differs from another.
    ///
    /// `KIND` subsumes the rest: nodes of different kinds have nothing
    /// further worth comparing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Change: u8 {
        /// Different variant, tag, or component identity.
        const KIND = 1 << 0;
        /// Different text content.
        const TEXT = 1 << 1;
        /// Different property map.
        const PROPS = 1 << 2;
        /// Different caller-supplied key.
        const KEY = 1 << 3;
        /// Different child count, order, or any changed descendant.
        const CHILDREN = 1 << 4;
    }
}

/// Summarize how `new` differs from `old`.
///
/// `CHILDREN` is deep: it reports a change anywhere in the subtree, not
/// just in the immediate child list.
pub fn changes(old: &Node, new: &Node) -> Change {
    if !same_kind(old, new) {
        return Change::KIND;
    }

    let mut change = Change::empty();
    match (old.data(), new.data()) {
        (NodeData::Text(a), NodeData::Text(b)) if a.content() != b.content() => {
            change |= Change::TEXT;
        }
        _ => {}
    }
    if old.props() != new.props() {
        change |= Change::PROPS;
    }
    if old.key() != new.key() {
        change |= Change::KEY;
    }
    if children_differ(old.children(), new.children()) {
        change |= Change::CHILDREN;
    }
    change
}

fn children_differ(old: &[Node], new: &[Node]) -> bool {
    old.len() != new.len()
        || old
            .iter()
            .zip(new)
            .any(|(a, b)| !changes(a, b).is_empty())
}

/// Nodes match in kind when they are the same variant and, for elements,
/// carry the same tag or, for components, the same component identity.
fn same_kind(old: &Node, new: &Node) -> bool {
    match (old.data(), new.data()) {
        (NodeData::Text(_), NodeData::Text(_)) => true,
        (NodeData::Element(a), NodeData::Element(b)) => a.tag() == b.tag(),
        (NodeData::Component(a), NodeData::Component(b)) => a.component() == b.component(),
        _ => false,
    }
}

// =============================================================================
// Patches
// =============================================================================

/// One structural edit turning the old tree into the new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Patch {
    /// Swap the whole subtree rooted at `node` for `with`.
    Replace { node: u64, with: Node },
    /// Replace the content of the text node `node`.
    SetText { node: u64, text: String },
    /// Replace the property map of `node`.
    SetProps { node: u64, props: Props },
    /// Insert `child` at `index` (position in the new child list).
    InsertChild {
        parent: u64,
        index: usize,
        child: Node,
    },
    /// Remove the child at `index` (position in the old child list).
    RemoveChild { parent: u64, index: usize },
    /// Move the child at old position `from` to new position `to`.
    MoveChild { parent: u64, from: usize, to: usize },
}

/// Diff two trees, producing the patches that turn `old` into `new`.
///
/// Children are matched by `key` when one is present, and by order among
/// the unkeyed otherwise; matched pairs recurse, everything else becomes
/// an insert or a removal. A kind or key mismatch replaces the whole
/// subtree. Equal trees produce an empty patch list.
pub fn diff(old: &Node, new: &Node) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_node(old, new, &mut patches);
    trace!(patches = patches.len(), "tree diff complete");
    patches
}

fn diff_node(old: &Node, new: &Node, patches: &mut Vec<Patch>) {
    // A changed kind or key means a different identity: replace wholesale
    // rather than morphing one node into another.
    if !same_kind(old, new) || old.key() != new.key() {
        patches.push(Patch::Replace {
            node: old.id(),
            with: new.clone(),
        });
        return;
    }

    match (old.data(), new.data()) {
        (NodeData::Text(a), NodeData::Text(b)) => {
            if a.content() != b.content() {
                patches.push(Patch::SetText {
                    node: old.id(),
                    text: b.content().to_string(),
                });
            }
        }
        _ => {
            if old.props() != new.props() {
                patches.push(Patch::SetProps {
                    node: old.id(),
                    props: new.props().cloned().unwrap_or_default(),
                });
            }
            diff_children(old.id(), old.children(), new.children(), patches);
        }
    }
}

fn diff_children(parent: u64, old: &[Node], new: &[Node], patches: &mut Vec<Patch>) {
    // Pair up children: by key when the new child carries one, by order
    // among the unmatched unkeyed otherwise.
    let mut matched_old = vec![false; old.len()];
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut inserts: Vec<usize> = Vec::new();

    let mut unkeyed_cursor = 0;
    for (new_pos, new_child) in new.iter().enumerate() {
        let matched = match new_child.key() {
            Some(key) => old.iter().position(|o| o.key() == Some(key)),
            None => {
                let found = old
                    .iter()
                    .enumerate()
                    .skip(unkeyed_cursor)
                    .find(|(pos, o)| !matched_old[*pos] && o.key().is_none())
                    .map(|(pos, _)| pos);
                if let Some(pos) = found {
                    unkeyed_cursor = pos + 1;
                }
                found
            }
        };
        match matched {
            Some(old_pos) if !matched_old[old_pos] => {
                matched_old[old_pos] = true;
                pairs.push((old_pos, new_pos));
            }
            _ => inserts.push(new_pos),
        }
    }

    // Removals first, index descending, so each index is still valid when
    // its removal applies.
    for old_pos in (0..old.len()).rev() {
        if !matched_old[old_pos] {
            patches.push(Patch::RemoveChild {
                parent,
                index: old_pos,
            });
        }
    }

    // A matched pair whose old position falls behind an earlier pair's
    // has been reordered.
    let mut highest: Option<usize> = None;
    for &(old_pos, new_pos) in &pairs {
        if highest.is_some_and(|h| old_pos < h) {
            patches.push(Patch::MoveChild {
                parent,
                from: old_pos,
                to: new_pos,
            });
        } else {
            highest = Some(old_pos);
        }
    }

    for &new_pos in &inserts {
        patches.push(Patch::InsertChild {
            parent,
            index: new_pos,
            child: new[new_pos].clone(),
        });
    }

    // Recurse into surviving pairs after the parent's own list edits.
    for &(old_pos, new_pos) in &pairs {
        diff_node(&old[old_pos], &new[new_pos], patches);
    }
}

// =============================================================================
// Tests
// =============================================================================
