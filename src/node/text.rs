//! Text node - a leaf wrapping character data.

use serde::Serialize;

/// Leaf node holding character data.
///
/// Primitive children (strings and numbers) are coerced to their standard
/// string form before they get here; the node itself never converts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextNode {
    content: String,
}

impl TextNode {
    pub(crate) fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The character data.
    pub fn content(&self) -> &str {
        &self.content
    }
}
