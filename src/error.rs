//! Error types for node construction.
//!
//! Every well-formed call shape normalizes without failing; these errors
//! exist only for the shapes that have no meaningful normalization. A
//! failed build returns no node at all - normalization is all-or-nothing.

use thiserror::Error;

/// Errors produced by [`build`](crate::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum BuildError {
    /// A child was still a nested list after the single flatten pass.
    ///
    /// Child lists splice into their parent exactly one level, matching
    /// the call shape; anything nested deeper is rejected rather than
    /// passed through malformed.
    #[error("child at position {position} is nested more than one list deep")]
    DeeplyNestedChild { position: usize },

    /// Child values were supplied in both argument slots.
    #[error("children were supplied in both the props and children positions")]
    DuplicateChildren,

    /// A property bag was supplied in the children slot.
    #[error("props must be supplied in the second position, before children")]
    MisplacedProps,
}
