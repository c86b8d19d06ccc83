//! Attribute statistics
//!
//! Entropy, split information, information gain and gain ratio of a binary
//! attribute over a subset of the examples. The subsets are index slices into
//! a [`Dataset`], never copies of the rows.
use crate::data::Dataset;
use crate::splitter::{partition, Branch};

/// Entropy in bits of a two outcome distribution, where `p` is the
/// probability of one of the outcomes. Defines `0 * log2(0) = 0`.
#[inline]
pub fn binary_entropy(p: f64) -> f64 {
    let q = 1.0 - p;
    if p <= 0.0 || q <= 0.0 {
        return 0.0;
    }
    -(p * p.log2() + q * q.log2())
}

/// Shannon entropy of a subset of 0/1 class labels.
///
/// Returns exactly `0.0` for a pure subset. The subset must not be empty;
/// an empty one is treated as pure instead of dividing by zero.
pub fn entropy(labels: &[u8]) -> f64 {
    debug_assert!(!labels.is_empty(), "entropy of an empty label subset");
    if labels.is_empty() {
        return 0.0;
    }
    let positives = labels.iter().filter(|&&y| y == 1).count();
    binary_entropy(positives as f64 / labels.len() as f64)
}

/// Split information of `attribute` over `examples`: the entropy of the
/// sizes of the value 0 and value 1 partitions.
///
/// It is `0.0` when the attribute does not split the subset.
pub fn split_info(data: &Dataset, examples: &[usize], attribute: usize) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let zeros = examples.iter().filter(|&&i| data.value(i, attribute) == 0).count();
    binary_entropy(zeros as f64 / examples.len() as f64)
}

/// Information gain of partitioning `examples` (with their parallel `labels`)
/// on `attribute`, given the entropy of the whole subset.
pub fn info_gain(data: &Dataset, examples: &[usize], labels: &[u8], parent_entropy: f64, attribute: usize) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let (zero, one) = partition(data, examples, labels, attribute);
    let fraction_zero = zero.examples.len() as f64 / examples.len() as f64;
    let fraction_one = 1.0 - fraction_zero;
    parent_entropy - fraction_zero * branch_entropy(&zero) - fraction_one * branch_entropy(&one)
}

fn branch_entropy(branch: &Branch) -> f64 {
    if branch.is_empty() {
        0.0
    } else {
        entropy(&branch.labels)
    }
}

/// Gain ratio of `attribute`, or `None` when its split information is zero
/// and the attribute cannot be a candidate.
pub fn gain_ratio(
    data: &Dataset,
    examples: &[usize],
    labels: &[u8],
    parent_entropy: f64,
    attribute: usize,
) -> Option<f64> {
    let split = split_info(data, examples, attribute);
    if split == 0.0 {
        return None;
    }
    Some(info_gain(data, examples, labels, parent_entropy, attribute) / split)
}
