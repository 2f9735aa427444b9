//! Component node - a component reference with its inputs.

use serde::Serialize;

use super::Node;
use crate::types::{ComponentRef, Props};

/// Node addressing a component rather than a concrete element.
///
/// The builder stores the reference along with the inputs a renderer will
/// eventually hand to it; nothing here invokes the component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentNode {
    component: ComponentRef,
    props: Props,
    key: Option<String>,
    children: Vec<Node>,
}

impl ComponentNode {
    pub(crate) fn new(
        component: ComponentRef,
        props: Props,
        key: Option<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            component,
            props,
            key,
            children,
        }
    }

    /// The component reference.
    pub fn component(&self) -> &ComponentRef {
        &self.component
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
