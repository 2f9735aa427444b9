//! Core types for sapling.
//!
//! These types define the friendly construction surface: the kind of node
//! being built, the property bag, and the loose child values callers are
//! allowed to pass. Everything here is input vocabulary - the canonical
//! output shape lives in [`crate::node`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::BuildError;
use crate::node::Node;

/// Name of the reserved identity prop, extracted before props reach a node.
const KEY_PROP: &str = "key";

// =============================================================================
// Node Kind
// =============================================================================

/// What a build call is asked to produce.
///
/// Decided at the call site: anything string-like is a tag addressing an
/// element, a [`ComponentRef`] addresses a component. Construction
/// dispatches on this with a plain `match` - there is no runtime type
/// inspection anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Element tag name, e.g. `"div"`.
    Tag(String),
    /// Component reference.
    Component(ComponentRef),
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::Tag(tag.to_string())
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::Tag(tag)
    }
}

impl From<ComponentRef> for NodeKind {
    fn from(component: ComponentRef) -> Self {
        NodeKind::Component(component)
    }
}

// =============================================================================
// Component Reference
// =============================================================================

/// Signature of a component render function.
///
/// Receives the component's props and already-normalized children and
/// produces the subtree to show in its place. The builder stores the
/// reference; only a renderer ever calls it.
pub type RenderFn = dyn Fn(&Props, &[Node]) -> Result<Node, BuildError> + Send + Sync;

/// A named handle to a component render function.
///
/// Equality is reference identity: two handles are the same component only
/// if they were cloned from the same `ComponentRef`. The name exists for
/// diagnostics and serialization, not identity.
#[derive(Clone)]
pub struct ComponentRef {
    name: &'static str,
    render: Arc<RenderFn>,
}

impl ComponentRef {
    /// Wrap a render function under a diagnostic name.
    pub fn new(
        name: &'static str,
        render: impl Fn(&Props, &[Node]) -> Result<Node, BuildError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            render: Arc::new(render),
        }
    }

    /// Diagnostic name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the render function.
    pub fn render(&self, props: &Props, children: &[Node]) -> Result<Node, BuildError> {
        (self.render)(props, children)
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentRef({})", self.name)
    }
}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A callable has no data form; the name is the best we can say.
        serializer.serialize_str(self.name)
    }
}

// =============================================================================
// Prop Value
// =============================================================================

/// A single property value.
///
/// The usual primitives, with `From` conversions so call sites stay terse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl PropValue {
    /// Standard string form of the value (`7` becomes `"7"`).
    pub fn to_text(&self) -> String {
        match self {
            PropValue::Str(s) => s.clone(),
            PropValue::Int(n) => n.to_string(),
            PropValue::Float(n) => n.to_string(),
            PropValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Float(value as f64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

// =============================================================================
// Props
// =============================================================================

/// Property bag attached to element and component nodes.
///
/// Build calls hand this over by value, so extracting the reserved `key`
/// entry can never alias a map the caller kept around.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(HashMap<String, PropValue>);

impl Props {
    /// Empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Pull the reserved `key` entry out of the bag.
    ///
    /// Returns the string form of whatever was stored under `"key"` and
    /// leaves the remaining entries untouched. After this, the bag is safe
    /// to hand to a node: it no longer carries an identity entry.
    pub fn take_key(&mut self) -> Option<String> {
        self.remove(KEY_PROP).map(|value| value.to_text())
    }
}

// =============================================================================
// Child Values
// =============================================================================

/// A loose child value as accepted by a build call.
///
/// This is the pre-normalization shape: empties are dropped, lists are
/// spliced one level, primitives become text nodes. Anything that cannot
/// be one of these variants cannot be a child at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Absent value; dropped during normalization.
    Empty,
    /// String primitive; becomes a text node.
    Text(String),
    /// Integer primitive; becomes a text node in standard string form.
    Int(i64),
    /// Float primitive; becomes a text node in standard string form.
    Float(f64),
    /// An already-constructed node, passed through as-is.
    Node(Node),
    /// A nested sequence, spliced into its parent exactly one level.
    List(Vec<Child>),
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Child::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Child::Text(value)
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Child::Int(value)
    }
}

impl From<i32> for Child {
    fn from(value: i32) -> Self {
        Child::Int(value as i64)
    }
}

impl From<u32> for Child {
    fn from(value: u32) -> Self {
        Child::Int(value as i64)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Child::Float(value)
    }
}

impl From<f32> for Child {
    fn from(value: f32) -> Self {
        Child::Float(value as f64)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Child::Empty,
        }
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(values: Vec<T>) -> Self {
        Child::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(values: [T; N]) -> Self {
        Child::List(values.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Build Arguments
// =============================================================================

/// One optional argument slot of a build call.
///
/// [`build`](crate::build) takes two of these after the kind: the props
/// slot and the children slot. `()` marks a slot as not supplied, which is
/// what lets a call skip props and pass children in their place.
#[derive(Debug, Clone, Default)]
pub enum BuildArg {
    /// Slot not supplied.
    #[default]
    None,
    /// A property bag.
    Props(Props),
    /// A single child, to be wrapped in a one-element sequence.
    Child(Child),
    /// An ordered sequence of children.
    Children(Vec<Child>),
}

impl From<()> for BuildArg {
    fn from(_: ()) -> Self {
        BuildArg::None
    }
}

impl From<Props> for BuildArg {
    fn from(props: Props) -> Self {
        BuildArg::Props(props)
    }
}

impl From<Child> for BuildArg {
    fn from(child: Child) -> Self {
        BuildArg::Child(child)
    }
}

impl From<&str> for BuildArg {
    fn from(value: &str) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<String> for BuildArg {
    fn from(value: String) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<i64> for BuildArg {
    fn from(value: i64) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<i32> for BuildArg {
    fn from(value: i32) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<u32> for BuildArg {
    fn from(value: u32) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<f64> for BuildArg {
    fn from(value: f64) -> Self {
        BuildArg::Child(value.into())
    }
}

impl From<Node> for BuildArg {
    fn from(node: Node) -> Self {
        BuildArg::Child(node.into())
    }
}

impl<T: Into<Child>> From<Vec<T>> for BuildArg {
    fn from(values: Vec<T>) -> Self {
        BuildArg::Children(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for BuildArg {
    fn from(values: [T; N]) -> Self {
        BuildArg::Children(values.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_value_conversions() {
        assert_eq!(PropValue::from("x"), PropValue::Str("x".to_string()));
        assert_eq!(PropValue::from(7i64), PropValue::Int(7));
        assert_eq!(PropValue::from(7u32), PropValue::Int(7));
        assert_eq!(PropValue::from(1.5f64), PropValue::Float(1.5));
        assert_eq!(PropValue::from(true), PropValue::Bool(true));
    }

    #[test]
    fn test_prop_value_to_text() {
        assert_eq!(PropValue::from("k1").to_text(), "k1");
        assert_eq!(PropValue::from(7i64).to_text(), "7");
        assert_eq!(PropValue::from(2.0f64).to_text(), "2");
        assert_eq!(PropValue::from(1.5f64).to_text(), "1.5");
        assert_eq!(PropValue::from(false).to_text(), "false");
    }

    #[test]
    fn test_props_builder() {
        let props = Props::new().with("id", "x").with("count", 3i64);
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("id"), Some(&PropValue::Str("x".to_string())));
        assert_eq!(props.get("count"), Some(&PropValue::Int(3)));
        assert!(!props.contains("missing"));
    }

    #[test]
    fn test_props_take_key() {
        let mut props = Props::new().with("key", "k1").with("id", "x");
        assert_eq!(props.take_key(), Some("k1".to_string()));
        assert!(!props.contains("key"));
        assert_eq!(props.len(), 1);

        // Numeric keys coerce to their string form.
        let mut props = Props::new().with("key", 42i64);
        assert_eq!(props.take_key(), Some("42".to_string()));

        // No key entry, nothing to take.
        let mut props = Props::new().with("id", "x");
        assert_eq!(props.take_key(), None);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_child_conversions() {
        assert_eq!(Child::from("a"), Child::Text("a".to_string()));
        assert_eq!(Child::from(3i64), Child::Int(3));
        assert_eq!(Child::from(1.5f64), Child::Float(1.5));
        assert_eq!(Child::from(None::<&str>), Child::Empty);
        assert_eq!(Child::from(Some("a")), Child::Text("a".to_string()));
        assert_eq!(
            Child::from(vec!["a", "b"]),
            Child::List(vec![
                Child::Text("a".to_string()),
                Child::Text("b".to_string())
            ])
        );
    }

    #[test]
    fn test_build_arg_conversions() {
        assert!(matches!(BuildArg::from(()), BuildArg::None));
        assert!(matches!(BuildArg::from(Props::new()), BuildArg::Props(_)));
        assert!(matches!(
            BuildArg::from("hello"),
            BuildArg::Child(Child::Text(_))
        ));
        assert!(matches!(BuildArg::from(vec!["a", "b"]), BuildArg::Children(c) if c.len() == 2));
        assert!(matches!(BuildArg::from(["a", "b", "c"]), BuildArg::Children(c) if c.len() == 3));
    }

    #[test]
    fn test_component_ref_identity() {
        let a = ComponentRef::new("A", |_, _| crate::build("div", (), ()));
        let b = ComponentRef::new("A", |_, _| crate::build("div", (), ()));
        let a2 = a.clone();

        // Same handle, same component; same name alone is not identity.
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(a.name(), "A");
    }
}
