//! Pruning Configuration
//!
//! Parameters of the randomized post-pruning: how many attempts to make, how
//! many nodes one attempt may prune, and the seed of the random draws.
use crate::constants::{DEFAULT_LOG_ITERATIONS, DEFAULT_MAX_PRUNED_NODES, DEFAULT_PRUNE_ATTEMPTS, DEFAULT_SEED};
use crate::errors::GainRatioError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_attempts() -> usize {
    DEFAULT_PRUNE_ATTEMPTS
}
fn default_max_pruned_nodes() -> usize {
    DEFAULT_MAX_PRUNED_NODES
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_log_iterations() -> usize {
    DEFAULT_LOG_ITERATIONS
}

/// Configuration for [`DecisionTree::prune`](crate::DecisionTree::prune).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Number of pruning attempts, `L`.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    /// Upper bound on the nodes pruned in one attempt, `K`.
    #[serde(default = "default_max_pruned_nodes")]
    pub max_pruned_nodes: usize,
    /// Seed for random number generation.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Logging frequency (every N attempts), 0 disables it.
    #[serde(default = "default_log_iterations")]
    pub log_iterations: usize,
}

impl Default for PruneConfig {
    fn default() -> Self {
        PruneConfig {
            attempts: DEFAULT_PRUNE_ATTEMPTS,
            max_pruned_nodes: DEFAULT_MAX_PRUNED_NODES,
            seed: DEFAULT_SEED,
            log_iterations: DEFAULT_LOG_ITERATIONS,
        }
    }
}

impl PruneConfig {
    /// * `attempts` - Number of pruning attempts, `L`.
    /// * `max_pruned_nodes` - Upper bound on the nodes pruned per attempt, `K`.
    pub fn new(attempts: usize, max_pruned_nodes: usize) -> Self {
        PruneConfig {
            attempts,
            max_pruned_nodes,
            ..Default::default()
        }
    }

    /// Set the number of pruning attempts.
    pub fn set_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the upper bound on the nodes pruned in one attempt.
    pub fn set_max_pruned_nodes(mut self, max_pruned_nodes: usize) -> Self {
        self.max_pruned_nodes = max_pruned_nodes;
        self
    }

    /// Set the seed of the random draws.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how often (in attempts) progress is logged.
    pub fn set_log_iterations(mut self, log_iterations: usize) -> Self {
        self.log_iterations = log_iterations;
        self
    }

    /// Both `attempts` and `max_pruned_nodes` must be positive.
    pub fn validate(&self) -> Result<(), GainRatioError> {
        validate_positive(self.attempts, "attempts")?;
        validate_positive(self.max_pruned_nodes, "max_pruned_nodes")
    }

    /// Parse a configuration from a json string, missing fields take their
    /// default value.
    pub fn from_json(json_str: &str) -> Result<Self, GainRatioError> {
        let config = serde_json::from_str::<PruneConfig>(json_str).map_err(|e| GainRatioError::UnableToRead(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a json file.
    ///
    /// * `path` - Path to load the configuration from.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GainRatioError> {
        let json_str = fs::read_to_string(path).map_err(|e| GainRatioError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }

    /// Dump the configuration as a json object.
    pub fn json_dump(&self) -> Result<String, GainRatioError> {
        serde_json::to_string(self).map_err(|e| GainRatioError::UnableToWrite(e.to_string()))
    }
}

fn validate_positive(value: usize, parameter: &str) -> Result<(), GainRatioError> {
    if value == 0 {
        Err(GainRatioError::InvalidParameter(
            parameter.to_string(),
            "a positive integer".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}
