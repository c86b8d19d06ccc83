//! Splitter
//!
//! Partitioning of an example subset on a binary attribute, and selection of
//! the attribute with the highest gain ratio.
use crate::data::Dataset;
use crate::statistics::gain_ratio;
use log::trace;

/// The examples (and their labels) that fall on one side of a split.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Branch {
    pub examples: Vec<usize>,
    pub labels: Vec<u8>,
}

impl Branch {
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

/// The winning attribute of a node, and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub gain_ratio: f64,
}

/// Split `examples` and their parallel `labels` into the value 0 branch and
/// the value 1 branch of `attribute`. Both keep the relative order of the input.
pub fn partition(data: &Dataset, examples: &[usize], labels: &[u8], attribute: usize) -> (Branch, Branch) {
    let mut zero = Branch::default();
    let mut one = Branch::default();
    for (&example, &label) in examples.iter().zip(labels) {
        let branch = if data.value(example, attribute) == 0 {
            &mut zero
        } else {
            &mut one
        };
        branch.examples.push(example);
        branch.labels.push(label);
    }
    (zero, one)
}

/// Choose the attribute of `attributes` with the highest gain ratio over
/// `examples`.
///
/// Attributes that do not split the subset are skipped. Ties keep the
/// attribute seen first, so the order of `attributes` decides between equal
/// scores. Returns `None` when no attribute splits the subset.
pub fn choose_best_attribute(
    data: &Dataset,
    examples: &[usize],
    labels: &[u8],
    attributes: &[usize],
    parent_entropy: f64,
) -> Option<SplitInfo> {
    let mut best: Option<SplitInfo> = None;
    let mut max_gain_ratio = -1.0;
    for &attribute in attributes {
        let Some(ratio) = gain_ratio(data, examples, labels, parent_entropy, attribute) else {
            continue;
        };
        trace!("({}, {})", data.attribute_names()[attribute], ratio);
        if ratio > max_gain_ratio {
            max_gain_ratio = ratio;
            best = Some(SplitInfo {
                split_feature: attribute,
                gain_ratio: ratio,
            });
        }
    }
    if let Some(split) = &best {
        trace!("{} is selected", data.attribute_names()[split.split_feature]);
    }
    best
}
