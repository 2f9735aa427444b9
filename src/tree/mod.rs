//! Tree utilities - traversal and structural diff over constructed trees.
//!
//! Everything here consumes the canonical node shape (`id`, `index`,
//! variant payload) and constructs nothing itself. [`diff`] describes the
//! edits turning one tree into another; applying them is a renderer
//! concern and stays out of this crate.

mod diff;
mod walk;

pub use diff::{Change, Patch, changes, diff};
pub use walk::{find, size, walk};
