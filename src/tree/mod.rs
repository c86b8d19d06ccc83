pub mod predict;
pub mod tree;

pub use tree::{non_leaf_nodes, DecisionTree};
