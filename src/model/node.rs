//! Tree node type

use super::Digest;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;

/// Byte repeated to form padding leaf content
pub const PADDING_BYTE: u8 = b'$';

/// Content of padding leaves for trees chunked at `leaf_size`
///
/// One byte longer than any real chunk can be, so a padding leaf never
/// shares its content (and hence its digest) with a real leaf. Returns
/// `None` when `leaf_size + 1` overflows; such a tree has a single chunk
/// and never pads.
pub fn padding_sentinel(leaf_size: usize) -> Option<Bytes> {
    let len = leaf_size.checked_add(1)?;
    Some(Bytes::from(vec![PADDING_BYTE; len]))
}

/// A node in the merkle tree
///
/// A node either has no children (a leaf, carrying its chunk) or exactly two
/// (an internal node, carrying only the combined digest). Children are owned
/// exclusively, so a built tree is acyclic and never shares subtrees.
///
/// Nodes are only constructed by [`TreeBuilder`](crate::TreeBuilder), which
/// keeps every tree perfect: all leaves at the same depth.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    digest: Digest,
    content: Bytes,
    padding: bool,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    /// Create a leaf holding a real chunk
    pub(crate) fn leaf(digest: Digest, content: Bytes) -> Self {
        Node {
            digest,
            content,
            padding: false,
            children: None,
        }
    }

    /// Create a padding leaf over a [`padding_sentinel`]
    pub(crate) fn padding(digest: Digest, sentinel: Bytes) -> Self {
        Node {
            digest,
            content: sentinel,
            padding: true,
            children: None,
        }
    }

    /// Create an internal node owning both children
    ///
    /// The node counts as padding when both children are padding.
    pub(crate) fn internal(digest: Digest, left: Node, right: Node) -> Self {
        Node {
            digest,
            content: Bytes::new(),
            padding: left.padding && right.padding,
            children: Some(Box::new((left, right))),
        }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The chunk bytes of a leaf; `None` for internal nodes
    pub fn raw_content(&self) -> Option<&[u8]> {
        if self.is_leaf() {
            Some(&self.content)
        } else {
            None
        }
    }

    pub fn left(&self) -> Option<&Node> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Node> {
        self.children.as_deref().map(|(_, right)| right)
    }

    /// Both children at once, for internal nodes
    pub fn children(&self) -> Option<(&Node, &Node)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this node was inserted to even out a level
    ///
    /// Set on padding leaves and on internal nodes made only of padding.
    pub fn is_padding(&self) -> bool {
        self.padding
    }

    /// Number of nodes on the leftmost root-to-leaf path
    ///
    /// Every leaf sits at the same depth, so the left spine is enough.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self;
        while let Some(left) = current.left() {
            height += 1;
            current = left;
        }
        height
    }

    /// Total node count, `2^height - 1`
    pub fn node_count(&self) -> usize {
        (1usize << self.height()) - 1
    }

    /// Root-hash equality, the tree's only notion of equality
    pub fn equal(&self, other: &Node) -> bool {
        self.digest == other.digest
    }

    /// A serializable snapshot of this node for reporting
    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            digest: self.digest.to_hex(),
            content: self
                .raw_content()
                .filter(|_| !self.padding)
                .map(|c| String::from_utf8_lossy(c).into_owned()),
            padding: self.padding,
            left: self.left().map(|n| n.digest.to_hex()),
            right: self.right().map(|n| n.digest.to_hex()),
        }
    }

    fn content_label(&self) -> String {
        if self.padding {
            "<padding>".to_string()
        } else if self.is_leaf() {
            String::from_utf8_lossy(&self.content).into_owned()
        } else {
            "<internal>".to_string()
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = self
            .left()
            .map(|n| format!("{} ({})", n.digest.short(), n.content_label()))
            .unwrap_or_else(|| "no_left_child".to_string());
        let right = self
            .right()
            .map(|n| format!("{} ({})", n.digest.short(), n.content_label()))
            .unwrap_or_else(|| "no_right_child".to_string());
        writeln!(f, "Content:    {}", self.content_label())?;
        writeln!(f, "Digest:     {}", self.digest)?;
        writeln!(f, "LeftChild:  {}", left)?;
        writeln!(f, "RightChild: {}", right)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("digest", &self.digest)
            .field("content", &self.content_label())
            .field("leaf", &self.is_leaf())
            .finish()
    }
}

/// Flattened view of a node, suitable for JSON output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub padding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8, content: &'static [u8]) -> Node {
        Node::leaf(Digest::from_bytes([byte; 32]), Bytes::from_static(content))
    }

    #[test]
    fn test_leaf_accessors() {
        let node = leaf(1, b"AB");
        assert!(node.is_leaf());
        assert!(!node.is_padding());
        assert_eq!(node.raw_content(), Some(&b"AB"[..]));
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.height(), 1);
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_internal_node_has_no_content() {
        let node = Node::internal(Digest::from_bytes([3; 32]), leaf(1, b"AB"), leaf(2, b"CD"));
        assert!(!node.is_leaf());
        assert!(node.raw_content().is_none());
        assert_eq!(node.left().unwrap().raw_content(), Some(&b"AB"[..]));
        assert_eq!(node.right().unwrap().raw_content(), Some(&b"CD"[..]));
        assert_eq!(node.height(), 2);
        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn test_padding_sentinel_longer_than_any_chunk() {
        let sentinel = padding_sentinel(2).unwrap();
        assert_eq!(&sentinel[..], b"$$$");
        assert!(padding_sentinel(usize::MAX).is_none());

        let pad = Node::padding(Digest::from_bytes([9; 32]), sentinel.clone());
        assert!(pad.is_padding());
        assert!(pad.is_leaf());
        assert_eq!(pad.raw_content(), Some(&sentinel[..]));
        assert!(pad.summary().content.is_none());
        assert!(!leaf(1, b"$").is_padding());
    }

    #[test]
    fn test_internal_over_padding_is_padding() {
        let pad = || Node::padding(Digest::from_bytes([9; 32]), padding_sentinel(2).unwrap());
        let all_pad = Node::internal(Digest::from_bytes([4; 32]), pad(), pad());
        let mixed = Node::internal(Digest::from_bytes([5; 32]), leaf(1, b"AB"), pad());
        assert!(all_pad.is_padding());
        assert!(!mixed.is_padding());
    }

    #[test]
    fn test_display_names_children() {
        let node = Node::internal(Digest::from_bytes([3; 32]), leaf(1, b"AB"), leaf(2, b"CD"));
        let rendered = node.to_string();
        assert!(rendered.contains("<internal>"));
        assert!(rendered.contains("(AB)"));
        assert!(rendered.contains("(CD)"));

        let rendered = leaf(1, b"AB").to_string();
        assert!(rendered.contains("no_left_child"));
        assert!(rendered.contains("no_right_child"));
    }

    #[test]
    fn test_summary_serializes() {
        let node = leaf(1, b"AB");
        let json = serde_json::to_value(node.summary()).unwrap();
        assert_eq!(json["content"], "AB");
        assert_eq!(json["padding"], false);
        assert!(json.get("left").is_none());
    }
}
