//! A single locale's message tree.

use std::collections::BTreeMap;

use crate::types::MessageNode;

/// The nested message tree for one locale.
///
/// Keys are dot-separated paths from the root to a string leaf. A path that
/// stops at a group, runs into a leaf early, or ends on a non-string leaf is
/// a miss.
///
/// # Example
///
/// ```
/// use lingo::Bundle;
///
/// let mut bundle = Bundle::new();
/// bundle.insert("ui.salvar_apontamento", "Salvar apontamento");
///
/// assert_eq!(bundle.message("ui.salvar_apontamento"), Some("Salvar apontamento"));
/// assert_eq!(bundle.message("ui"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    root: MessageNode,
}

impl Default for Bundle {
    fn default() -> Self {
        Bundle {
            root: MessageNode::Group(BTreeMap::new()),
        }
    }
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tree. A root that is not a group yields a bundle in
    /// which every lookup misses.
    pub fn from_root(root: MessageNode) -> Self {
        Bundle { root }
    }

    pub fn root(&self) -> &MessageNode {
        &self.root
    }

    /// Walk `key` segment by segment from the root.
    ///
    /// Returns the node at the end of the path, whatever its kind. The empty
    /// key names nothing.
    pub fn lookup(&self, key: &str) -> Option<&MessageNode> {
        if key.is_empty() {
            return None;
        }
        key.split('.')
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// The message template stored at `key`, if `key` is a full path to a
    /// string leaf.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(MessageNode::as_message)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.message(key).is_some()
    }

    /// Insert a message at `key`, creating intermediate groups as needed.
    ///
    /// Any leaf standing where a group is needed is replaced by a group.
    pub fn insert(&mut self, key: &str, text: impl Into<String>) {
        insert_path(&mut self.root, key.split('.'), text.into());
    }

    /// Every leaf reachable by a dotted key, with that key, in key order.
    ///
    /// Empty groups contribute nothing, and neither does anything below a
    /// member name containing `.` (see [`Bundle::unreachable_keys`]).
    pub fn leaves(&self) -> Vec<(String, &MessageNode)> {
        let mut walk = LeafWalk::default();
        walk.visit(&self.root, String::new(), false);
        walk.reachable
    }

    /// Paths of leaves that sit below a member name containing `.`.
    ///
    /// Splitting a key on `.` can never produce such a segment, so these
    /// leaves always miss.
    pub fn unreachable_keys(&self) -> Vec<String> {
        let mut walk = LeafWalk::default();
        walk.visit(&self.root, String::new(), false);
        walk.unreachable
    }

    /// Dotted keys of every string message, in key order.
    pub fn keys(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .filter(|(_, node)| node.as_message().is_some())
            .map(|(key, _)| key)
            .collect()
    }

    /// Dotted keys of leaves that are not string messages.
    pub fn unsupported_keys(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .filter(|(_, node)| matches!(node, MessageNode::Unsupported(_)))
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of string messages in the bundle.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn insert_path<'k>(
    node: &mut MessageNode,
    mut segments: impl Iterator<Item = &'k str>,
    text: String,
) {
    let Some(segment) = segments.next() else {
        *node = MessageNode::Message(text);
        return;
    };
    if let MessageNode::Group(children) = node {
        let child = children
            .entry(segment.to_string())
            .or_insert_with(|| MessageNode::Group(BTreeMap::new()));
        insert_path(child, segments, text);
    } else {
        let mut children = BTreeMap::new();
        let child = children
            .entry(segment.to_string())
            .or_insert_with(|| MessageNode::Group(BTreeMap::new()));
        insert_path(child, segments, text);
        *node = MessageNode::Group(children);
    }
}

#[derive(Default)]
struct LeafWalk<'a> {
    reachable: Vec<(String, &'a MessageNode)>,
    unreachable: Vec<String>,
}

impl<'a> LeafWalk<'a> {
    fn visit(&mut self, node: &'a MessageNode, path: String, dotted: bool) {
        let MessageNode::Group(children) = node else {
            if path.is_empty() {
                return;
            }
            if dotted {
                self.unreachable.push(path);
            } else {
                self.reachable.push((path, node));
            }
            return;
        };
        for (segment, child) in children {
            let child_path = if path.is_empty() {
                segment.clone()
            } else {
                format!("{path}.{segment}")
            };
            self.visit(child, child_path, dotted || segment.contains('.'));
        }
    }
}

impl From<MessageNode> for Bundle {
    fn from(root: MessageNode) -> Self {
        Bundle::from_root(root)
    }
}

impl<K: Into<String>> FromIterator<(K, MessageNode)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (K, MessageNode)>>(iter: I) -> Self {
        Bundle::from_root(MessageNode::group(iter))
    }
}
