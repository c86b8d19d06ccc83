use crate::data::Dataset;
use crate::errors::GainRatioError;
use crate::grower::Id3Grower;
use crate::node::Node;
use hashbrown::HashMap;
use log::info;
use std::collections::VecDeque;
use std::path::Path;

/// A decision tree grown with ID3 over a binary data set.
///
/// The tree owns the data set it was grown on. The root is absent only when
/// that data set has no examples.
#[derive(Clone, Debug)]
pub struct DecisionTree {
    data: Dataset,
    pub root: Option<Node>,
}

impl DecisionTree {
    /// Grow a tree on every example and attribute of `data`.
    pub fn fit(data: Dataset) -> Self {
        let root = Id3Grower::new(&data).grow_all();
        let tree = DecisionTree { data, root };
        info!(
            "grew tree on {} examples: n_nodes: {}, n_leaves: {}, depth: {}",
            tree.data.n_examples(),
            tree.n_nodes(),
            tree.n_leaves(),
            tree.depth()
        );
        tree
    }

    /// Load a training set from a csv file and grow a tree on it.
    ///
    /// * `path` - Path of the training csv file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, GainRatioError> {
        Ok(Self::fit(Dataset::from_csv(path)?))
    }

    /// The training data set.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn attribute_names(&self) -> &[String] {
        self.data.attribute_names()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, Node::n_nodes)
    }

    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, Node::n_leaves)
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Internal nodes in breadth first order, see [`non_leaf_nodes`].
    pub fn non_leaf_nodes(&self) -> Vec<&Node> {
        non_leaf_nodes(self.root.as_ref())
    }

    /// Number of internal nodes testing each attribute, keyed by attribute name.
    /// Attributes that are never tested are left out.
    pub fn attribute_usage(&self) -> HashMap<String, usize> {
        let mut usage = HashMap::new();
        let mut stack: Vec<&Node> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            if let Some(feature) = node.split_feature {
                *usage.entry(self.attribute_names()[feature].clone()).or_insert(0) += 1;
            }
            stack.extend(node.children());
        }
        usage
    }

    /// Fail unless `data` has as many attributes as the training set.
    pub(crate) fn check_attributes(&self, data: &Dataset) -> Result<(), GainRatioError> {
        if data.n_attributes() != self.data.n_attributes() {
            return Err(GainRatioError::AttributeMismatch {
                expected: self.data.n_attributes(),
                found: data.n_attributes(),
            });
        }
        Ok(())
    }
}

/// Internal nodes of the tree under `root`, breadth first.
///
/// A child is only visited when it is itself an internal node. The root is
/// always the first entry; the list is empty when the root is a leaf or absent.
pub fn non_leaf_nodes(root: Option<&Node>) -> Vec<&Node> {
    let mut nodes = Vec::new();
    let Some(root) = root.filter(|r| !r.is_leaf()) else {
        return nodes;
    };
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        nodes.push(node);
        queue.extend(node.children().filter(|c| !c.is_leaf()));
    }
    nodes
}
