//! Node tree data model.
//!
//! A [`Node`] is one position in a constructed virtual tree: a stamped
//! identity, a position among its siblings, and one of three payload
//! variants:
//!
//! - [`TextNode`] - leaf character data
//! - [`ElementNode`] - tagged container with props and children
//! - [`ComponentNode`] - component reference with props and children
//!
//! Variants are plain data holders. They receive already-normalized
//! inputs (flat children, key-free props) and never normalize anything
//! themselves; all construction flows through [`build`](crate::build), so
//! the id/index invariants cannot be bypassed from outside the crate.

mod component;
mod element;
mod text;

pub use component::ComponentNode;
pub use element::ElementNode;
pub use text::TextNode;

use serde::Serialize;

use crate::types::{ComponentRef, Props};

// =============================================================================
// Node
// =============================================================================

/// Variant payload of a [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeData {
    Text(TextNode),
    Element(ElementNode),
    Component(ComponentNode),
}

/// One position in a virtual tree.
///
/// `id` is assigned exactly once, at construction, and never changes.
/// `index` is the position among the current siblings: 0 on a freshly
/// built node, rewritten whenever the node is adopted as a child of a
/// later build call. A node reused under several parents simply carries
/// the index of its most recent insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: u64,
    index: usize,
    data: NodeData,
}

impl Node {
    pub(crate) fn new(id: u64, data: NodeData) -> Self {
        Self { id, index: 0, data }
    }

    /// Process-unique identity, immutable after construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Position among the current siblings (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Variant payload.
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn is_component(&self) -> bool {
        matches!(self.data, NodeData::Component(_))
    }

    /// Character data, for text nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text.content()),
            _ => None,
        }
    }

    /// Tag name, for element nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element(element) => Some(element.tag()),
            _ => None,
        }
    }

    /// Component reference, for component nodes.
    pub fn component(&self) -> Option<&ComponentRef> {
        match &self.data {
            NodeData::Component(component) => Some(component.component()),
            _ => None,
        }
    }

    /// Caller-supplied key, for element and component nodes.
    pub fn key(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element(element) => element.key(),
            NodeData::Component(component) => component.key(),
            NodeData::Text(_) => None,
        }
    }

    /// Property bag, for element and component nodes.
    pub fn props(&self) -> Option<&Props> {
        match &self.data {
            NodeData::Element(element) => Some(element.props()),
            NodeData::Component(component) => Some(component.props()),
            NodeData::Text(_) => None,
        }
    }

    /// Children in sibling order. Empty for text nodes.
    pub fn children(&self) -> &[Node] {
        match &self.data {
            NodeData::Element(element) => element.children(),
            NodeData::Component(component) => component.children(),
            NodeData::Text(_) => &[],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentRef;
    use crate::{Props, build};

    #[test]
    fn test_accessors_on_element() {
        let node = build("div", Props::new().with("key", "k").with("id", "x"), "hi").unwrap();
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.key(), Some("k"));
        assert_eq!(node.component(), None);
        assert_eq!(node.text(), None);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].text(), Some("hi"));
    }

    #[test]
    fn test_accessors_on_text_child() {
        let node = build("div", (), "hello").unwrap();
        let child = &node.children()[0];
        assert!(child.is_text());
        assert_eq!(child.text(), Some("hello"));
        assert_eq!(child.tag(), None);
        assert_eq!(child.key(), None);
        assert!(child.props().is_none());
        assert!(child.children().is_empty());
    }

    #[test]
    fn test_accessors_on_component() {
        let widget = ComponentRef::new("Widget", |_, _| build("div", (), ()));
        let node = build(widget.clone(), (), ()).unwrap();
        assert!(node.is_component());
        assert_eq!(node.component(), Some(&widget));
        assert_eq!(node.tag(), None);
    }
}
