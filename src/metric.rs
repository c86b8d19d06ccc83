//! Metric
//!
//! Scoring of a tree against a labeled data set.
use crate::data::Dataset;
use crate::errors::GainRatioError;
use crate::node::Node;
use crate::tree::DecisionTree;
use rayon::prelude::*;

/// Fraction of the examples of `data` whose label the tree under `root`
/// predicts. It is `0.0` for an absent tree or an empty data set.
///
/// `data` must have the attributes the tree was grown on, see
/// [`DecisionTree::accuracy`] for the checked version.
pub fn accuracy(root: Option<&Node>, data: &Dataset) -> f64 {
    let Some(root) = root else {
        return 0.0;
    };
    if data.is_empty() {
        return 0.0;
    }
    let correct = data
        .rows()
        .par_iter()
        .zip(data.labels())
        .filter(|(row, label)| root.predict_row(row) == **label)
        .count();
    correct as f64 / data.n_examples() as f64
}

/// Scores candidate trees, higher is better.
pub trait Evaluator {
    fn evaluate(&self, root: Option<&Node>) -> f64;
}

/// Scores trees by their accuracy on a held out data set.
pub struct Validator<'a> {
    data: &'a Dataset,
}

impl<'a> Validator<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Validator { data }
    }
}

impl Evaluator for Validator<'_> {
    fn evaluate(&self, root: Option<&Node>) -> f64 {
        accuracy(root, self.data)
    }
}

impl DecisionTree {
    /// Accuracy of the tree on `data`, which must have the attributes of the
    /// training set.
    pub fn accuracy(&self, data: &Dataset) -> Result<f64, GainRatioError> {
        self.check_attributes(data)?;
        Ok(accuracy(self.root.as_ref(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn data() -> Dataset {
        Dataset::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
            vec![0, 1, 1, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_accuracy() {
        let data = data();
        let tree = DecisionTree::fit(data.clone());
        assert_eq!(accuracy(tree.root(), &data), 1.0);
        assert_eq!(tree.accuracy(&data).unwrap(), 1.0);

        // A single leaf voting 1 is right on three of four rows.
        let leaf = Node::leaf(1, 0, 4);
        assert_relative_eq!(accuracy(Some(&leaf), &data), 0.75);
        assert_relative_eq!(Validator::new(&data).evaluate(Some(&leaf)), 0.75);
    }

    #[test]
    fn test_accuracy_empty() {
        let data = data();
        let empty = Dataset::new(vec!["A".to_string(), "B".to_string()], vec![], vec![]).unwrap();
        assert_eq!(accuracy(None, &data), 0.0);
        assert_eq!(accuracy(Some(&Node::leaf(1, 0, 4)), &empty), 0.0);
    }

    #[test]
    fn test_accuracy_attribute_mismatch() {
        let tree = DecisionTree::fit(data());
        let narrow = Dataset::new(vec!["A".to_string()], vec![vec![0]], vec![0]).unwrap();
        assert!(matches!(
            tree.accuracy(&narrow),
            Err(GainRatioError::AttributeMismatch { expected: 2, found: 1 })
        ));
    }
}
