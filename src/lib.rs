//! # sapling
//!
//! Virtual node tree construction and diffing for UI renderers.
//!
//! sapling turns the friendly call shape - a kind, an optional property
//! bag, an optional set of children - into a canonical immutable tree of
//! typed nodes, with a process-unique id and a sibling position stamped
//! on every node. It does not render, patch, or schedule anything; it
//! shapes input for the layers that do.
//!
//! ## Pipeline
//!
//! ```text
//! build(kind, props, children)
//!   -> disambiguate arguments
//!   -> normalize children (drop empties, flatten one level, wrap text, index)
//!   -> dispatch variant (tag -> element, component ref -> component)
//!   -> stamp identity
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Construction vocabulary (NodeKind, Props, Child, ...)
//! - [`node`] - The node tree data model (Text/Element/Component)
//! - [`builder`] - The construction surface ([`build`] and [`Factory`])
//! - [`ids`] - Process-unique node identity
//! - [`tree`] - Traversal and structural diff over constructed trees

pub mod builder;
pub mod error;
pub mod ids;
pub mod node;
pub mod tree;
pub mod types;

// Re-export the working surface
pub use builder::{Factory, build};
pub use error::BuildError;
pub use ids::IdGenerator;
pub use node::{ComponentNode, ElementNode, Node, NodeData, TextNode};
pub use types::{BuildArg, Child, ComponentRef, NodeKind, PropValue, Props, RenderFn};
