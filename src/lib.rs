mod node;

// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod export;
pub mod grower;
pub mod metric;
pub mod prune;
pub mod splitter;
pub mod statistics;
pub mod tree;

// Individual classes, and functions
pub use config::PruneConfig;
pub use data::Dataset;
pub use errors::GainRatioError;
pub use metric::{accuracy, Evaluator, Validator};
pub use node::Node;
pub use prune::PruneReport;
pub use tree::DecisionTree;
