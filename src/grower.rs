//! Grower
//!
//! Top-down ID3 induction: every node takes the majority label of its
//! examples, then splits on the attribute with the highest gain ratio until
//! the examples are pure or no attribute can split them.
use crate::data::Dataset;
use crate::node::Node;
use crate::splitter::{choose_best_attribute, partition};
use crate::statistics::entropy;

/// Grows a tree over a borrowed data set.
pub struct Id3Grower<'a> {
    data: &'a Dataset,
}

impl<'a> Id3Grower<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Id3Grower { data }
    }

    /// Grow a tree over every example and attribute of the data set.
    pub fn grow_all(&self) -> Option<Node> {
        self.grow(&self.data.examples(), self.data.labels(), &self.data.attributes())
    }

    /// Grow a tree over a subset of the examples.
    ///
    /// * `examples` - Row indices of the examples.
    /// * `labels` - The labels of `examples`, in the same order.
    /// * `attributes` - Column indices of the attributes that may be tested.
    ///
    /// Returns `None` if `examples` is empty.
    pub fn grow(&self, examples: &[usize], labels: &[u8], attributes: &[usize]) -> Option<Node> {
        self.grow_node(examples, labels, attributes, 0)
    }

    fn grow_node(&self, examples: &[usize], labels: &[u8], attributes: &[usize], depth: usize) -> Option<Node> {
        if examples.is_empty() {
            return None;
        }

        let mut node = Node::leaf(majority_label(labels), depth, examples.len());
        let node_entropy = entropy(labels);
        if node_entropy == 0.0 || attributes.is_empty() {
            return Some(node);
        }

        let Some(split) = choose_best_attribute(self.data, examples, labels, attributes, node_entropy) else {
            return Some(node);
        };

        let remaining: Vec<usize> = attributes
            .iter()
            .copied()
            .filter(|&a| a != split.split_feature)
            .collect();
        let (zero, one) = partition(self.data, examples, labels, split.split_feature);
        let left = self.grow_node(&zero.examples, &zero.labels, &remaining, depth + 1);
        let right = self.grow_node(&one.examples, &one.labels, &remaining, depth + 1);
        node.make_parent_node(split, left, right);
        Some(node)
    }
}

/// Majority label of a label subset.
///
/// A single example gives its own label. Otherwise this is 1 as soon as the
/// count of 1 labels reaches `len / 2` rounded down, so an even split votes
/// for 1, and so does one 1 among three labels.
pub fn majority_label(labels: &[u8]) -> u8 {
    if let [only] = labels {
        return *only;
    }
    let positives = labels.iter().filter(|&&y| y == 1).count();
    if !labels.is_empty() && positives >= labels.len() / 2 {
        1
    } else {
        0
    }
}
