//! Averaged decision-tree ensemble.

use serde::{Deserialize, Serialize};

use crate::passenger::FEATURE_COUNT;

/// One node of a flattened decision tree. Node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go to `left` when `row[feature_index] <= threshold`, else `right`.
    Split {
        feature_index: u16,
        threshold: f32,
        left: usize,
        right: usize,
    },
    /// Fraction of training passengers in this leaf who survived.
    Leaf { probability: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children must point strictly forward so every walk reaches a leaf.
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    if feature_index as usize >= FEATURE_COUNT {
                        return Err(format!(
                            "node {idx} splits on feature {feature_index} but rows have {FEATURE_COUNT}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx} links to invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { probability } => {
                    if !(0.0..=1.0).contains(&probability) {
                        return Err(format!("leaf {idx} probability {probability} outside [0, 1]"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf. Broken links yield `NaN`.
    pub fn leaf_probability(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        let mut idx = 0usize;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { probability }) => return *probability,
                Some(TreeNode::Split {
                    feature_index,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature_index as usize).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
                None => break,
            }
        }
        f32::NAN
    }
}

/// Forest whose survival probability is the mean over its trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionForest {
    pub trees: Vec<DecisionTree>,
}

impl DecisionForest {
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|reason| format!("tree {idx}: {reason}"))?;
        }
        Ok(())
    }

    pub fn positive_probability(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        if self.trees.is_empty() {
            return f32::NAN;
        }
        let sum: f32 = self.trees.iter().map(|tree| tree.leaf_probability(row)).sum();
        sum / self.trees.len() as f32
    }
}
