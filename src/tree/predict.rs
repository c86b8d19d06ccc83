use super::tree::DecisionTree;
use crate::data::Dataset;
use crate::errors::GainRatioError;
use crate::node::Node;
use rayon::prelude::*;

impl Node {
    /// Walk down from this node, going left on a 0 and right otherwise, and
    /// return the label of the node where the walk ends.
    ///
    /// `row` must hold a value for every attribute the tree splits on,
    /// otherwise this panics.
    pub fn predict_row(&self, row: &[u8]) -> u8 {
        let mut node = self;
        while let Some(feature) = node.split_feature {
            match node.get_child(row[feature]) {
                Some(child) => node = child,
                None => break,
            }
        }
        node.label
    }
}

impl DecisionTree {
    /// Predict the class of a single row of attribute values.
    ///
    /// Returns `None` if the tree is empty, and an error if the row is not as
    /// wide as the training set.
    pub fn predict_row(&self, row: &[u8]) -> Result<Option<u8>, GainRatioError> {
        if row.len() != self.data().n_attributes() {
            return Err(GainRatioError::AttributeMismatch {
                expected: self.data().n_attributes(),
                found: row.len(),
            });
        }
        Ok(self.root.as_ref().map(|root| root.predict_row(row)))
    }

    /// Predict the class of every example in `data`.
    ///
    /// Returns `None` if the tree is empty, and an error if `data` does not
    /// have the attributes of the training set.
    pub fn predict(&self, data: &Dataset) -> Result<Option<Vec<u8>>, GainRatioError> {
        self.check_attributes(data)?;
        let Some(root) = self.root.as_ref() else {
            return Ok(None);
        };
        Ok(Some(data.rows().par_iter().map(|row| root.predict_row(row)).collect()))
    }
}
