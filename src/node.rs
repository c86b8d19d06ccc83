use crate::splitter::SplitInfo;
use std::fmt;

/// A node of a binary decision tree.
///
/// A leaf has no split feature and no children. An internal node tests
/// `split_feature`, sending value 0 to `left` and value 1 to `right`. Every
/// node keeps the majority label of the training examples that reached it,
/// which becomes its prediction if the node is pruned into a leaf.
///
/// Each node owns its children, so `clone` copies the whole subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub split_feature: Option<usize>,
    pub label: u8,
    pub split_gain: f64,
    pub depth: usize,
    pub n_examples: usize,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf, every node starts as one.
    pub fn leaf(label: u8, depth: usize, n_examples: usize) -> Self {
        Node {
            split_feature: None,
            label,
            split_gain: 0.0,
            depth,
            n_examples,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.split_feature.is_none()
    }

    /// Turn this node into one testing the attribute of `split`.
    pub fn make_parent_node(&mut self, split: SplitInfo, left: Option<Node>, right: Option<Node>) {
        self.split_feature = Some(split.split_feature);
        self.split_gain = split.gain_ratio;
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
    }

    /// Drop the subtree below this node, keeping its label as the prediction.
    pub fn make_leaf(&mut self) {
        self.split_feature = None;
        self.split_gain = 0.0;
        self.left = None;
        self.right = None;
    }

    /// Get the child that should be traveled down, given the value of the
    /// split feature.
    #[inline]
    pub fn get_child(&self, value: u8) -> Option<&Node> {
        if value == 0 {
            self.left.as_deref()
        } else {
            self.right.as_deref()
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Number of nodes in the subtree rooted here.
    pub fn n_nodes(&self) -> usize {
        1 + self.children().map(Node::n_nodes).sum::<usize>()
    }

    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children().map(Node::n_leaves).sum()
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        self.children().map(|c| 1 + c.height()).max().unwrap_or(0)
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.split_feature {
            None => write!(f, "{}:leaf={},cover={}", self.depth, self.label, self.n_examples),
            Some(feature) => write!(
                f,
                "{}:[{} == 0] label={},gain_ratio={},cover={}",
                self.depth, feature, self.label, self.split_gain, self.n_examples
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Node {
        let mut root = Node::leaf(1, 0, 4);
        root.make_parent_node(
            SplitInfo {
                split_feature: 0,
                gain_ratio: 0.31,
            },
            Some(Node::leaf(0, 1, 2)),
            Some(Node::leaf(1, 1, 2)),
        );
        root
    }

    #[test]
    fn test_make_parent_and_leaf() {
        let mut root = stump();
        assert!(!root.is_leaf());
        assert_eq!(root.n_nodes(), 3);
        assert_eq!(root.n_leaves(), 2);
        assert_eq!(root.height(), 1);
        assert_eq!(root.get_child(0).unwrap().label, 0);
        assert_eq!(root.get_child(1).unwrap().label, 1);

        root.make_leaf();
        assert!(root.is_leaf());
        assert!(root.left.is_none() && root.right.is_none());
        assert_eq!(root.label, 1);
        assert_eq!(root.n_nodes(), 1);
        assert_eq!(root.height(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = stump();
        let mut copy = original.clone();
        copy.left.as_mut().unwrap().label = 1;
        copy.make_leaf();
        assert_eq!(original.n_nodes(), 3);
        assert_eq!(original.left.as_ref().unwrap().label, 0);
    }

    #[test]
    fn test_display() {
        let root = stump();
        assert_eq!(root.to_string(), "0:[0 == 0] label=1,gain_ratio=0.31,cover=4");
        assert_eq!(root.left.unwrap().to_string(), "1:leaf=0,cover=2");
    }
}
