use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

/// One node of a locale bundle's message tree.
///
/// Bundles are loaded as-is without schema checks, so any JSON value that is
/// neither a string nor an object is kept as [`MessageNode::Unsupported`]
/// and simply misses at lookup time.
///
/// # Example
///
/// ```
/// use lingo::MessageNode;
///
/// let node: MessageNode = serde_json::from_str(r#"{ "ui": { "ok": "OK" } }"#).unwrap();
/// let ui = node.child("ui").unwrap();
/// assert_eq!(ui.child("ok").and_then(MessageNode::as_message), Some("OK"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// A leaf message template.
    Message(String),

    /// A nested mapping of segment name to child node.
    Group(BTreeMap<String, MessageNode>),

    /// A leaf that is not a string (number, boolean, array or null).
    Unsupported(IgnoredAny),
}

impl MessageNode {
    /// Build a group node from `(segment, node)` pairs.
    pub fn group<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, MessageNode)>,
    {
        MessageNode::Group(
            children
                .into_iter()
                .map(|(segment, node)| (segment.into(), node))
                .collect(),
        )
    }

    /// Build a leaf message node.
    pub fn message(text: impl Into<String>) -> Self {
        MessageNode::Message(text.into())
    }

    /// The leaf template, if this node is a message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            MessageNode::Message(text) => Some(text),
            MessageNode::Group(_) | MessageNode::Unsupported(_) => None,
        }
    }

    /// Follow one path segment. Only group nodes have children.
    pub fn child(&self, segment: &str) -> Option<&MessageNode> {
        match self {
            MessageNode::Group(children) => children.get(segment),
            MessageNode::Message(_) | MessageNode::Unsupported(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MessageNode::Group(_))
    }
}

impl From<&str> for MessageNode {
    fn from(text: &str) -> Self {
        MessageNode::message(text)
    }
}

impl From<String> for MessageNode {
    fn from(text: String) -> Self {
        MessageNode::Message(text)
    }
}
