//! Export
//!
//! Human readable text rendering of a tree. Every internal node writes one
//! line per branch, `name= 0 :` and `name= 1 :`, indented with one `| ` per
//! level. A leaf is written as its label, on the line of the branch leading
//! to it.
use crate::constants::LEVEL_BAR;
use crate::errors::GainRatioError;
use crate::node::Node;
use crate::tree::DecisionTree;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

/// Render the tree under `root`, naming split features from `attribute_names`.
/// An absent tree renders as an empty string.
pub fn render(root: Option<&Node>, attribute_names: &[String]) -> String {
    let mut out = String::new();
    if let Some(root) = root {
        render_node(root, 0, attribute_names, &mut out);
    }
    out
}

fn render_node(node: &Node, level: usize, attribute_names: &[String], out: &mut String) {
    let Some(feature) = node.split_feature else {
        out.push_str(&node.label.to_string());
        out.push('\n');
        return;
    };
    let name: Cow<str> = match attribute_names.get(feature) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(feature.to_string()),
    };
    let bars = LEVEL_BAR.repeat(level);
    for (value, child) in [(0, node.left.as_deref()), (1, node.right.as_deref())] {
        out.push_str(&bars);
        out.push_str(&format!("{}= {} :", name, value));
        match child {
            Some(child) if child.is_leaf() => render_node(child, level + 1, attribute_names, out),
            Some(child) => {
                out.push('\n');
                render_node(child, level + 1, attribute_names, out);
            }
            None => out.push('\n'),
        }
    }
}

impl DecisionTree {
    /// The text rendering of the tree.
    pub fn to_text(&self) -> String {
        render(self.root(), self.attribute_names())
    }

    /// Write the text rendering of the tree to a file.
    ///
    /// * `path` - Path to write the tree to.
    pub fn export_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), GainRatioError> {
        fs::write(path, self.to_text()).map_err(|e| GainRatioError::UnableToWrite(e.to_string()))
    }
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
