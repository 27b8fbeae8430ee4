//! Leaf-level comparison between two trees

use crate::model::Node;
use crate::{Error, Result};
use tracing::debug;

/// A leaf position where two trees disagree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffEntry<'a> {
    /// Zero-based leaf position, left to right
    pub index: usize,
    /// Leaf of the first (old) tree
    pub old: &'a Node,
    /// Leaf of the second (new) tree
    pub new: &'a Node,
}

/// A positional diff between two congruent trees
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeafDiff<'a> {
    pub entries: Vec<DiffEntry<'a>>,
}

impl<'a> LeafDiff<'a> {
    pub fn new(entries: Vec<DiffEntry<'a>>) -> Self {
        LeafDiff { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.index).collect()
    }

    /// Differing leaves of the new tree, left to right
    pub fn changed_leaves(&self) -> Vec<&'a Node> {
        self.entries.iter().map(|e| e.new).collect()
    }

    /// Entries where either side is padding (content grew or shrank)
    pub fn padding_changes(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.old.is_padding() || e.new.is_padding())
            .count()
    }
}

fn check_congruent(old: &Node, new: &Node) -> Result<()> {
    let (left, right) = (old.height(), new.height());
    if left != right {
        return Err(Error::IncongruentTrees { left, right });
    }
    Ok(())
}

impl Node {
    /// Leaves of `other` whose digest differs from the leaf at the same
    /// position in `self`
    ///
    /// Both trees must have the same height. Equal roots short-circuit to an
    /// empty result; otherwise the full leaf levels are compared pairwise.
    pub fn inconsistent_leaves<'a>(&'a self, other: &'a Node) -> Result<Vec<&'a Node>> {
        check_congruent(self, other)?;

        if self.equal(other) {
            debug!("roots match, no inconsistent leaves");
            return Ok(Vec::new());
        }

        let differing: Vec<&Node> = self
            .leaves()
            .into_iter()
            .zip(other.leaves())
            .filter(|(mine, theirs)| !mine.equal(theirs))
            .map(|(_, theirs)| theirs)
            .collect();

        debug!(count = differing.len(), "found inconsistent leaves");
        Ok(differing)
    }
}

/// Diff two congruent trees by descending only into differing subtrees
///
/// Produces the same leaves as [`Node::inconsistent_leaves`], with their
/// positions, visiting `O(k log n)` nodes for `k` changed leaves.
pub fn diff_leaves<'a>(old: &'a Node, new: &'a Node) -> Result<LeafDiff<'a>> {
    check_congruent(old, new)?;

    let mut entries = Vec::new();
    // (old subtree, new subtree, index of its leftmost leaf, remaining depth)
    let mut stack = vec![(old, new, 0usize, old.height() - 1)];

    while let Some((a, b, index, depth)) = stack.pop() {
        if a.equal(b) {
            continue;
        }
        match (a.children(), b.children()) {
            (Some((a_left, a_right)), Some((b_left, b_right))) => {
                let half = 1usize << (depth - 1);
                stack.push((a_right, b_right, index + half, depth - 1));
                stack.push((a_left, b_left, index, depth - 1));
            }
            _ => entries.push(DiffEntry { index, old: a, new: b }),
        }
    }

    debug!(changed = entries.len(), "leaf diff computed");
    Ok(LeafDiff::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    #[test]
    fn test_single_changed_chunk() {
        let t1 = build("ABCDEFGH", 2).unwrap();
        let t2 = build("ABCDXXGH", 2).unwrap();

        assert!(!t1.root().equal(t2.root()));
        let changed = t1.root().inconsistent_leaves(t2.root()).unwrap();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].raw_content(), Some(&b"XX"[..]));
    }

    #[test]
    fn test_identical_trees_have_no_diff() {
        let t1 = build("ABCDEFGH", 2).unwrap();
        let t2 = build("ABCDEFGH", 2).unwrap();

        assert!(t1.root().inconsistent_leaves(t1.root()).unwrap().is_empty());
        assert!(t1.root().inconsistent_leaves(t2.root()).unwrap().is_empty());
        assert!(diff_leaves(t1.root(), t2.root()).unwrap().is_empty());
    }

    #[test]
    fn test_incongruent_trees_rejected() {
        let t1 = build("ABCDEFGH", 2).unwrap();
        let t2 = build("ABCDEFGH", 4).unwrap();

        let err = t1.root().inconsistent_leaves(t2.root()).unwrap_err();
        assert_eq!(err, Error::IncongruentTrees { left: 3, right: 2 });
        assert!(matches!(
            diff_leaves(t1.root(), t2.root()),
            Err(Error::IncongruentTrees { .. })
        ));
    }

    #[test]
    fn test_diff_reports_positions_in_order() {
        let t1 = build("AABBCCDDEEFFGGHH", 2).unwrap();
        let t2 = build("AAXXCCDDEEFFGGYY", 2).unwrap();

        let diff = diff_leaves(t1.root(), t2.root()).unwrap();
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.indices(), vec![1, 7]);
        assert_eq!(diff.entries[0].old.raw_content(), Some(&b"BB"[..]));
        assert_eq!(diff.entries[0].new.raw_content(), Some(&b"XX"[..]));
        assert_eq!(diff.padding_changes(), 0);
    }

    #[test]
    fn test_pruned_diff_matches_positional_diff() {
        let t1 = build("the quick brown fox jumps over", 3).unwrap();
        let t2 = build("the quick BROWN fox jumps 0ver", 3).unwrap();

        let positional = t1.root().inconsistent_leaves(t2.root()).unwrap();
        let pruned = diff_leaves(t1.root(), t2.root()).unwrap();
        assert_eq!(positional, pruned.changed_leaves());
        assert!(!positional.is_empty());
    }

    #[test]
    fn test_diff_across_padding() {
        let t1 = build("ABCDEF", 2).unwrap();
        let t2 = build("ABCDEFGH", 2).unwrap();

        let diff = diff_leaves(t1.root(), t2.root()).unwrap();
        assert_eq!(diff.indices(), vec![3]);
        assert!(diff.entries[0].old.is_padding());
        assert_eq!(diff.entries[0].new.raw_content(), Some(&b"GH"[..]));
        assert_eq!(diff.padding_changes(), 1);
    }

    #[test]
    fn test_single_leaf_trees() {
        let t1 = build("AB", 4).unwrap();
        let t2 = build("AC", 4).unwrap();

        let diff = diff_leaves(t1.root(), t2.root()).unwrap();
        assert_eq!(diff.indices(), vec![0]);
        assert_eq!(t1.root().inconsistent_leaves(t2.root()).unwrap().len(), 1);
    }
}
