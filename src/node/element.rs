//! Element node - a tagged container.

use serde::Serialize;

use super::Node;
use crate::types::Props;

/// Container node addressed by a tag name.
///
/// Holds already-normalized inputs: the props never contain a `key` entry
/// and the children are flat, ordered, fully built nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    tag: String,
    props: Props,
    key: Option<String>,
    children: Vec<Node>,
}

impl ElementNode {
    pub(crate) fn new(
        tag: String,
        props: Props,
        key: Option<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            tag,
            props,
            key,
            children,
        }
    }

    /// Tag name, e.g. `"div"`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Property bag (never contains a `key` entry).
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Caller-supplied stable identity hint, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Children in sibling order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
