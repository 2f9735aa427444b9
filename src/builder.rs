//! Node factory - the friendly construction surface.
//!
//! [`build`] accepts the loose call shape - a kind, an optional property
//! bag, an optional set of children - and turns it into one canonical
//! node. Construction runs in fixed phases:
//!
//! 1. Disambiguate arguments (children may arrive in the props slot)
//! 2. Normalize children (drop empties, flatten one level, wrap
//!    primitives as text nodes, re-index)
//! 3. Extract the reserved `key` prop
//! 4. Dispatch on kind (tag -> element, component -> component)
//! 5. Stamp identity and root position
//!
//! Normalization is all-or-nothing: if any child is rejected, the whole
//! call fails and no node is produced.

use tracing::trace;

use crate::error::BuildError;
use crate::ids::{GLOBAL_IDS, IdGenerator};
use crate::node::{ComponentNode, ElementNode, Node, NodeData, TextNode};
use crate::types::{BuildArg, Child, NodeKind, Props};

// =============================================================================
// Factory
// =============================================================================

/// Node factory over an explicit id source.
///
/// The free-standing [`build`] uses the process-wide generator, which is
/// what almost every caller wants. Construct a `Factory` over your own
/// [`IdGenerator`] when you need deterministic ids, e.g. in tests:
///
/// ```
/// use sapling::{Factory, IdGenerator};
///
/// let ids = IdGenerator::with_seed(100);
/// let factory = Factory::with_ids(&ids);
/// let node = factory.build("div", (), ())?;
/// assert_eq!(node.id(), 100);
/// # Ok::<(), sapling::BuildError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Factory<'g> {
    ids: &'g IdGenerator,
}

impl Factory<'static> {
    /// Factory over the process-wide id generator.
    pub fn new() -> Self {
        Self { ids: &GLOBAL_IDS }
    }
}

impl Default for Factory<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> Factory<'g> {
    /// Factory over a caller-owned id generator.
    pub fn with_ids(ids: &'g IdGenerator) -> Self {
        Self { ids }
    }

    /// Build a node from the friendly call shape.
    ///
    /// See the free-standing [`build`] for the full contract.
    pub fn build(
        &self,
        kind: impl Into<NodeKind>,
        props: impl Into<BuildArg>,
        children: impl Into<BuildArg>,
    ) -> Result<Node, BuildError> {
        self.build_node(kind.into(), props.into(), children.into())
    }

    fn build_node(
        &self,
        kind: NodeKind,
        props: BuildArg,
        children: BuildArg,
    ) -> Result<Node, BuildError> {
        // 1. DISAMBIGUATE - a call that skipped props and passed children
        // in their place has a child-like value in the props slot and an
        // empty children slot.
        let (props, children) = match (props, children) {
            (BuildArg::Child(child), BuildArg::None) => (Props::new(), vec![child]),
            (BuildArg::Children(list), BuildArg::None) => (Props::new(), list),
            (props_arg, children_arg) => {
                let props = match props_arg {
                    BuildArg::None => Props::new(),
                    BuildArg::Props(props) => props,
                    BuildArg::Child(_) | BuildArg::Children(_) => {
                        return Err(BuildError::DuplicateChildren);
                    }
                };
                let children = match children_arg {
                    BuildArg::None => Vec::new(),
                    // Single child: the caller skipped the sequence.
                    BuildArg::Child(child) => vec![child],
                    BuildArg::Children(list) => list,
                    BuildArg::Props(_) => return Err(BuildError::MisplacedProps),
                };
                (props, children)
            }
        };

        // 2. NORMALIZE CHILDREN
        let children = self.normalize(children)?;

        // 3. EXTRACT KEY - nodes never see a `key` entry in their props.
        let mut props = props;
        let key = props.take_key();

        // 4. DISPATCH - components are callables, everything else is a tag.
        let data = match kind {
            NodeKind::Component(component) => {
                NodeData::Component(ComponentNode::new(component, props, key, children))
            }
            NodeKind::Tag(tag) => NodeData::Element(ElementNode::new(tag, props, key, children)),
        };

        // 5. STAMP IDENTITY - index stays 0 until a later build call
        // adopts this node as a child.
        let node = Node::new(self.ids.next(), data);
        trace!(id = node.id(), children = node.children().len(), "built node");
        Ok(node)
    }

    /// Normalization pipeline over the children sequence.
    ///
    /// Fixed order: drop empties, flatten one level, wrap primitives as
    /// text nodes, then re-index. A list still nested after the flatten
    /// pass aborts the build.
    fn normalize(&self, children: Vec<Child>) -> Result<Vec<Node>, BuildError> {
        let children = flatten_once(drop_empty(children));

        let mut nodes = Vec::with_capacity(children.len());
        for (position, child) in children.into_iter().enumerate() {
            let node = match child {
                // Empties spliced out of a nested list are dropped too:
                // children handed to a node must be empty-free.
                Child::Empty => continue,
                Child::Text(text) => self.text_node(text),
                Child::Int(n) => self.text_node(n.to_string()),
                Child::Float(n) => self.text_node(n.to_string()),
                Child::Node(node) => node,
                Child::List(_) => return Err(BuildError::DeeplyNestedChild { position }),
            };
            nodes.push(node);
        }

        // Dense 0-based positions matching final sibling order, overwriting
        // whatever position a reused node carried before.
        for (position, node) in nodes.iter_mut().enumerate() {
            node.set_index(position);
        }

        Ok(nodes)
    }

    /// Wrap coerced character data as a text node, with its own identity.
    fn text_node(&self, content: String) -> Node {
        Node::new(self.ids.next(), NodeData::Text(TextNode::new(content)))
    }
}

// =============================================================================
// Normalization helpers
// =============================================================================

/// Remove empty (absent) values from the sequence.
fn drop_empty(children: Vec<Child>) -> Vec<Child> {
    children
        .into_iter()
        .filter(|child| !matches!(child, Child::Empty))
        .collect()
}

/// Splice nested lists in place, exactly one level, preserving order.
fn flatten_once(children: Vec<Child>) -> Vec<Child> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Child::List(nested) => flat.extend(nested),
            other => flat.push(other),
        }
    }
    flat
}

// =============================================================================
// Entry point
// =============================================================================

/// Build a node with the process-wide id generator.
///
/// `kind` decides the variant: a string tag produces an element, a
/// [`ComponentRef`](crate::ComponentRef) produces a component node. Both
/// trailing arguments are optional - pass `()` for an absent slot, and
/// feel free to put children in the props slot when there are no props:
///
/// ```
/// use sapling::{Props, build};
///
/// // Full shape.
/// let node = build("div", Props::new().with("id", "app"), vec!["hello"])?;
/// assert_eq!(node.tag(), Some("div"));
///
/// // Children can take the props slot when props are skipped.
/// let node = build("ul", vec!["one", "two"], ())?;
/// assert_eq!(node.children().len(), 2);
/// # Ok::<(), sapling::BuildError>(())
/// ```
///
/// Children may be single values or sequences; empties (`None`) are
/// dropped, sequences nested one level are spliced in place, and string or
/// number children become text nodes. Every node comes back with a
/// process-unique `id` and a dense 0-based `index` over its children.
pub fn build(
    kind: impl Into<NodeKind>,
    props: impl Into<BuildArg>,
    children: impl Into<BuildArg>,
) -> Result<Node, BuildError> {
    Factory::new().build(kind, props, children)
}

// =============================================================================
// Tests
// =============================================================================
