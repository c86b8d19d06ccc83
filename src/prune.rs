//! Prune
//!
//! Randomized reduced-error post-pruning. Each attempt copies the best tree
//! found so far, turns a random number of its internal nodes into leaves, and
//! keeps the copy if it scores at least as well on the validation data.
use crate::config::PruneConfig;
use crate::data::Dataset;
use crate::errors::GainRatioError;
use crate::metric::{Evaluator, Validator};
use crate::node::Node;
use crate::tree::{non_leaf_nodes, DecisionTree};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Summary of a call to [`DecisionTree::prune`].
#[derive(Clone, Debug, PartialEq)]
pub struct PruneReport {
    /// Attempts that ran to completion and were scored.
    pub attempts: usize,
    /// Attempts whose copy replaced the best tree.
    pub accepted: usize,
    /// Pruning stopped because no internal node besides the root was left.
    pub stopped_early: bool,
    pub score_before: f64,
    pub score_after: f64,
    pub n_nodes_before: usize,
    pub n_nodes_after: usize,
}

impl DecisionTree {
    /// Post prune the tree against a validation set.
    ///
    /// * `validation` - Held out data with the attributes of the training set.
    /// * `config` - Number of attempts, nodes pruned per attempt and seed.
    pub fn prune(&mut self, validation: &Dataset, config: &PruneConfig) -> Result<PruneReport, GainRatioError> {
        self.check_attributes(validation)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        self.prune_with(&Validator::new(validation), config, &mut rng)
    }

    /// Post prune the tree, scoring copies with `evaluator` and drawing from `rng`.
    ///
    /// The seed of `config` is not used, `rng` is the only source of randomness.
    pub fn prune_with<E, R>(
        &mut self,
        evaluator: &E,
        config: &PruneConfig,
        rng: &mut R,
    ) -> Result<PruneReport, GainRatioError>
    where
        E: Evaluator,
        R: Rng,
    {
        config.validate()?;

        let mut best = self.root.take();
        let mut best_score = evaluator.evaluate(best.as_ref());
        let mut report = PruneReport {
            attempts: 0,
            accepted: 0,
            stopped_early: false,
            score_before: best_score,
            score_after: best_score,
            n_nodes_before: best.as_ref().map_or(0, Node::n_nodes),
            n_nodes_after: 0,
        };

        'attempts: for attempt in 1..=config.attempts {
            let Some(best_root) = best.as_ref() else {
                report.stopped_early = true;
                break;
            };
            let mut candidate = best_root.clone();

            let n_prune = rng.gen_range(1..=config.max_pruned_nodes);
            for _ in 0..n_prune {
                // The root holds position 0 and is never pruned.
                let n_non_leaf = non_leaf_nodes(Some(&candidate)).len();
                if n_non_leaf < 2 {
                    report.stopped_early = true;
                    break 'attempts;
                }
                let position = rng.gen_range(1..n_non_leaf);
                if let Some(node) = nth_non_leaf_mut(&mut candidate, position) {
                    node.make_leaf();
                }
            }

            report.attempts += 1;
            let score = evaluator.evaluate(Some(&candidate));
            if score >= best_score {
                debug!(
                    "attempt {}: accepted, n_nodes: {} -> {}, score: {} -> {}",
                    attempt,
                    best_root.n_nodes(),
                    candidate.n_nodes(),
                    best_score,
                    score
                );
                best = Some(candidate);
                best_score = score;
                report.accepted += 1;
            }
            if config.log_iterations > 0 && attempt % config.log_iterations == 0 {
                info!(
                    "attempt {}, best score: {:.4}, n_nodes: {}",
                    attempt,
                    best_score,
                    best.as_ref().map_or(0, Node::n_nodes)
                );
            }
        }

        if report.stopped_early {
            debug!("no internal node besides the root is left to prune, stopping early");
        }

        self.root = best;
        report.score_after = best_score;
        report.n_nodes_after = self.n_nodes();
        info!(
            "pruning: n_nodes: {} -> {}, score: {:.4} -> {:.4}, accepted {} of {} attempts",
            report.n_nodes_before,
            report.n_nodes_after,
            report.score_before,
            report.score_after,
            report.accepted,
            report.attempts
        );
        Ok(report)
    }
}

/// The internal node at `position` in the breadth first order of
/// [`non_leaf_nodes`], borrowed mutably.
fn nth_non_leaf_mut(root: &mut Node, position: usize) -> Option<&mut Node> {
    if root.is_leaf() {
        return None;
    }
    let mut queue: VecDeque<&mut Node> = VecDeque::new();
    queue.push_back(root);
    let mut current = 0;
    while let Some(node) = queue.pop_front() {
        if current == position {
            return Some(node);
        }
        current += 1;
        if let Some(left) = node.left.as_deref_mut() {
            if !left.is_leaf() {
                queue.push_back(left);
            }
        }
        if let Some(right) = node.right.as_deref_mut() {
            if !right.is_leaf() {
                queue.push_back(right);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::accuracy;

    /// Scores every tree the same, so every completed attempt is accepted.
    struct Constant;

    impl Evaluator for Constant {
        fn evaluate(&self, _root: Option<&Node>) -> f64 {
            0.5
        }
    }

    /// Prefers bigger trees, so no pruned copy is ever accepted.
    struct Size;

    impl Evaluator for Size {
        fn evaluate(&self, root: Option<&Node>) -> f64 {
            root.map_or(0, Node::n_nodes) as f64
        }
    }

    fn scenario_a() -> Dataset {
        Dataset::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
            vec![0, 1, 1, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_nth_non_leaf_mut_order() {
        let tree = DecisionTree::from_csv("resources/training_set.csv").unwrap();
        let mut root = tree.root.clone().unwrap();
        let expected: Vec<(Option<usize>, usize, usize)> = tree
            .non_leaf_nodes()
            .iter()
            .map(|n| (n.split_feature, n.depth, n.n_examples))
            .collect();
        for (position, e) in expected.iter().enumerate() {
            let node = nth_non_leaf_mut(&mut root, position).unwrap();
            assert_eq!(&(node.split_feature, node.depth, node.n_examples), e);
        }
        assert!(nth_non_leaf_mut(&mut root, expected.len()).is_none());
    }

    #[test]
    fn test_root_only_tree_is_unchanged() {
        let data = Dataset::new(vec!["A".to_string()], vec![vec![1], vec![0]], vec![1, 1]).unwrap();
        let mut tree = DecisionTree::fit(data.clone());
        let before = tree.root.clone();
        let report = tree.prune(&data, &PruneConfig::new(1, 1)).unwrap();
        assert!(report.stopped_early);
        assert_eq!(report.attempts, 0);
        assert_eq!(tree.root, before);
    }

    #[test]
    fn test_stump_is_never_pruned() {
        // Only the root is internal, and the root is never eligible.
        let data = Dataset::new(vec!["A".to_string()], vec![vec![0], vec![1]], vec![0, 1]).unwrap();
        let mut tree = DecisionTree::fit(data.clone());
        assert_eq!(tree.n_nodes(), 3);
        let report = tree.prune(&data, &PruneConfig::new(5, 3)).unwrap();
        assert!(report.stopped_early);
        assert_eq!(tree.n_nodes(), 3);
    }

    #[test]
    fn test_empty_tree() {
        let data = Dataset::new(vec!["A".to_string()], vec![], vec![]).unwrap();
        let mut tree = DecisionTree::fit(data.clone());
        let report = tree.prune(&data, &PruneConfig::new(3, 3)).unwrap();
        assert!(report.stopped_early);
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_ties_accept_the_pruned_tree() {
        let mut tree = DecisionTree::fit(scenario_a());
        assert_eq!(tree.n_nodes(), 5);
        let mut rng = StdRng::seed_from_u64(0);
        let report = tree.prune_with(&Constant, &PruneConfig::new(1, 1), &mut rng).unwrap();
        // The only eligible node is the split on B under the root.
        assert_eq!(report.attempts, 1);
        assert_eq!(report.accepted, 1);
        assert_eq!(tree.n_nodes(), 3);
        let left = tree.root().unwrap().left.as_deref().unwrap();
        assert!(left.is_leaf());
        assert_eq!(left.label, 1);

        // The pruned tree has nothing left to prune.
        let report = tree.prune_with(&Constant, &PruneConfig::new(4, 2), &mut rng).unwrap();
        assert!(report.stopped_early);
        assert_eq!(tree.n_nodes(), 3);
    }

    #[test]
    fn test_worse_copies_are_rejected() {
        let mut tree = DecisionTree::from_csv("resources/training_set.csv").unwrap();
        let before = tree.root.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let report = tree.prune_with(&Size, &PruneConfig::new(20, 4), &mut rng).unwrap();
        assert!(report.attempts == 20 || report.stopped_early);
        assert_eq!(report.accepted, 0);
        assert_eq!(tree.root, before);
    }

    #[test]
    fn test_prune_never_lowers_validation_accuracy() {
        let validation = Dataset::from_csv("resources/validation_set.csv").unwrap();
        for seed in 0..5 {
            let mut tree = DecisionTree::from_csv("resources/training_set.csv").unwrap();
            let before = accuracy(tree.root(), &validation);
            let n_nodes = tree.n_nodes();
            let config = PruneConfig::new(30, 5).set_seed(seed);
            let report = tree.prune(&validation, &config).unwrap();
            let after = accuracy(tree.root(), &validation);
            assert!(after >= before);
            assert_eq!(report.score_before, before);
            assert_eq!(report.score_after, after);
            assert!(tree.n_nodes() <= n_nodes);
            assert_eq!(tree.n_nodes(), 2 * tree.n_leaves() - 1);
        }
    }

    #[test]
    fn test_prune_is_reproducible() {
        let validation = Dataset::from_csv("resources/validation_set.csv").unwrap();
        let original = DecisionTree::from_csv("resources/training_set.csv").unwrap();
        let config = PruneConfig::new(25, 3).set_seed(11);
        let mut first = original.clone();
        let mut second = original.clone();
        let a = first.prune(&validation, &config).unwrap();
        let b = second.prune(&validation, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(first.root, second.root);
    }

    #[test]
    fn test_prune_rejects_bad_input() {
        let mut tree = DecisionTree::fit(scenario_a());
        let narrow = Dataset::new(vec!["A".to_string()], vec![vec![0]], vec![0]).unwrap();
        assert!(matches!(
            tree.prune(&narrow, &PruneConfig::default()),
            Err(GainRatioError::AttributeMismatch { .. })
        ));
        let data = scenario_a();
        assert!(matches!(
            tree.prune(&data, &PruneConfig::new(1, 0)),
            Err(GainRatioError::InvalidParameter(..))
        ));
        assert_eq!(tree.n_nodes(), 5);
    }
}
