//! Tree traversal operations
//!
//! Every traversal returns a freshly collected `Vec` of borrowed nodes;
//! nothing is cached between calls. Depth-first orders use an explicit
//! stack so deep trees cannot exhaust the call stack.

use crate::model::Node;
use crate::{Error, Result};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Visit order for depth-first traversal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthFirstOrder {
    /// Node, then left subtree, then right subtree
    Pre,
    /// Left subtree, then node, then right subtree
    In,
    /// Left subtree, then right subtree, then node
    Post,
}

impl fmt::Display for DepthFirstOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DepthFirstOrder::Pre => "pre",
            DepthFirstOrder::In => "in",
            DepthFirstOrder::Post => "post",
        };
        f.write_str(name)
    }
}

impl FromStr for DepthFirstOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(DepthFirstOrder::Pre),
            "in" | "inorder" => Ok(DepthFirstOrder::In),
            "post" | "postorder" => Ok(DepthFirstOrder::Post),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown traversal order: {}",
                other
            ))),
        }
    }
}

/// Pending work on the depth-first stack
enum Step<'a> {
    /// Expand this subtree according to the order
    Visit(&'a Node),
    /// Record this node
    Emit(&'a Node),
}

impl Node {
    /// All nodes of this subtree in the given depth-first order
    pub fn depth_first(&self, order: DepthFirstOrder) -> Vec<&Node> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = vec![Step::Visit(self)];

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Emit(node) => {
                    out.push(node);
                    continue;
                }
                Step::Visit(node) => node,
            };

            let Some((left, right)) = node.children() else {
                out.push(node);
                continue;
            };

            // Pushed in reverse so they pop in visit order
            match order {
                DepthFirstOrder::Pre => {
                    stack.push(Step::Visit(right));
                    stack.push(Step::Visit(left));
                    stack.push(Step::Emit(node));
                }
                DepthFirstOrder::In => {
                    stack.push(Step::Visit(right));
                    stack.push(Step::Emit(node));
                    stack.push(Step::Visit(left));
                }
                DepthFirstOrder::Post => {
                    stack.push(Step::Emit(node));
                    stack.push(Step::Visit(right));
                    stack.push(Step::Visit(left));
                }
            }
        }

        out
    }

    /// All nodes of this subtree level by level, left to right
    pub fn breadth_first(&self) -> Vec<&Node> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut queue = VecDeque::from([self]);

        while let Some(node) = queue.pop_front() {
            out.push(node);
            if let Some((left, right)) = node.children() {
                queue.push_back(left);
                queue.push_back(right);
            }
        }

        out
    }

    /// Nodes at maximum depth, left to right, padding included
    ///
    /// In a perfect tree these are the last `2^(height-1)` nodes of the
    /// breadth-first order.
    pub fn leaves(&self) -> Vec<&Node> {
        let cutoff = (1usize << (self.height() - 1)) - 1;
        let mut nodes = self.breadth_first();
        nodes.split_off(cutoff)
    }

    /// The leaf at position `index` (zero-based, left to right)
    ///
    /// Walks down from this node using the bits of `index`, so the cost is
    /// proportional to the height.
    pub fn find_leaf(&self, index: usize) -> Option<&Node> {
        let depth = self.height() - 1;
        if depth < usize::BITS as usize && index >> depth != 0 {
            return None;
        }

        let mut current = self;
        for bit in (0..depth).rev() {
            let (left, right) = current.children()?;
            current = if (index >> bit) & 1 == 0 { left } else { right };
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    fn labels(nodes: &[&Node]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| match n.raw_content() {
                Some(c) => String::from_utf8_lossy(c).into_owned(),
                None => "*".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_preorder() {
        let tree = build("ABCDEFGH", 2).unwrap();
        let nodes = tree.root().depth_first(DepthFirstOrder::Pre);
        assert_eq!(labels(&nodes), vec!["*", "*", "AB", "CD", "*", "EF", "GH"]);
        assert!(nodes[0].equal(tree.root()));
    }

    #[test]
    fn test_inorder() {
        let tree = build("ABCDEFGH", 2).unwrap();
        let nodes = tree.root().depth_first(DepthFirstOrder::In);
        assert_eq!(labels(&nodes), vec!["AB", "*", "CD", "*", "EF", "*", "GH"]);
        assert!(nodes[3].equal(tree.root()));
    }

    #[test]
    fn test_postorder() {
        let tree = build("ABCDEFGH", 2).unwrap();
        let nodes = tree.root().depth_first(DepthFirstOrder::Post);
        assert_eq!(labels(&nodes), vec!["AB", "CD", "*", "EF", "GH", "*", "*"]);
        assert!(nodes[6].equal(tree.root()));
    }

    #[test]
    fn test_breadth_first() {
        let tree = build("ABCDEFGH", 2).unwrap();
        let nodes = tree.root().breadth_first();
        assert_eq!(labels(&nodes), vec!["*", "*", "*", "AB", "CD", "EF", "GH"]);
    }

    #[test]
    fn test_traversal_of_single_leaf() {
        let tree = build("A", 4).unwrap();
        for order in [DepthFirstOrder::Pre, DepthFirstOrder::In, DepthFirstOrder::Post] {
            assert_eq!(tree.root().depth_first(order).len(), 1);
        }
        assert_eq!(tree.root().breadth_first().len(), 1);
        assert_eq!(tree.root().leaves().len(), 1);
    }

    #[test]
    fn test_traversal_from_subtree() {
        let tree = build("ABCDEFGH", 2).unwrap();
        let right = tree.root().right().unwrap();
        assert_eq!(labels(&right.depth_first(DepthFirstOrder::Pre)), vec!["*", "EF", "GH"]);
        assert_eq!(labels(&right.leaves()), vec!["EF", "GH"]);
    }

    #[test]
    fn test_leaves_include_padding() {
        let tree = build("ABCDEF", 2).unwrap();
        let leaves = tree.root().leaves();
        assert_eq!(leaves.len(), 4);
        assert!(leaves.iter().all(|n| n.is_leaf()));
        assert!(leaves[3].is_padding());
        assert!(leaves[..3].iter().all(|n| !n.is_padding()));
    }

    #[test]
    fn test_find_leaf_matches_leaves() {
        let tree = build("ABCDEFGHIJ", 2).unwrap();
        let leaves = tree.root().leaves();
        for (i, leaf) in leaves.iter().enumerate() {
            assert_eq!(tree.root().find_leaf(i), Some(*leaf));
        }
        assert!(tree.root().find_leaf(leaves.len()).is_none());
        assert!(build("A", 1).unwrap().root().find_leaf(1).is_none());
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("preorder".parse::<DepthFirstOrder>().unwrap(), DepthFirstOrder::Pre);
        assert_eq!("In".parse::<DepthFirstOrder>().unwrap(), DepthFirstOrder::In);
        assert_eq!("post".parse::<DepthFirstOrder>().unwrap(), DepthFirstOrder::Post);
        assert!("sideways".parse::<DepthFirstOrder>().is_err());
    }
}
