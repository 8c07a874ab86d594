//! Gradient-boosted decision tree ensemble for binary classification.
//!
//! The serialized form mirrors a binary log-loss boosting model:
//!
//! ```text
//! raw   = init_score + learning_rate * sum(tree(x) for tree in trees)
//! proba = 1 / (1 + exp(-raw))
//! label = 1 if raw >= 0 else 0
//! ```
//!
//! Split nodes send `x[feature] <= threshold` left. Child indices must point
//! strictly forward, which rules out cycles and bounds traversal by the node
//! count.

use serde::{Deserialize, Serialize};

use sdp_model::RiskLabel;
use sdp_transform::FeatureSchema;

use crate::error::{ArtifactError, InferenceError};

/// Format identifier expected in the artifact header.
pub const MODEL_FORMAT: &str = "sdp.gbt-classifier";
pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn validate(&self, tree: usize, feature_count: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::InvalidTree {
                tree,
                node: 0,
                message: "tree has no nodes".to_string(),
            });
        }
        let node_count = self.nodes.len();
        for (node, entry) in self.nodes.iter().enumerate() {
            let invalid = |message: String| ArtifactError::InvalidTree {
                tree,
                node,
                message,
            };
            match entry {
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(format!("leaf value {value} is not finite")));
                    }
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= feature_count {
                        return Err(invalid(format!(
                            "feature index {feature} out of range (model has {feature_count} features)"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("threshold {threshold} is not finite")));
                    }
                    for child in [*left, *right] {
                        if child <= node || child >= node_count {
                            return Err(invalid(format!(
                                "child index {child} must be in {}..{node_count}",
                                node + 1
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// On-disk artifact layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFile {
    pub format: String,
    pub format_version: u32,
    /// Ordered feature columns the model was trained on.
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    pub init_score: f64,
    pub learning_rate: f64,
    pub trees: Vec<Tree>,
}

/// A validated ensemble with its feature schema.
#[derive(Debug, Clone)]
pub struct GradientBoostedTrees {
    schema: FeatureSchema,
    init_score: f64,
    learning_rate: f64,
    trees: Vec<Tree>,
}

impl GradientBoostedTrees {
    /// Validate a parsed artifact.
    pub fn from_file(file: ArtifactFile) -> Result<Self, ArtifactError> {
        if file.format != MODEL_FORMAT {
            return Err(ArtifactError::UnsupportedFormat {
                message: format!("format '{}' (expected '{MODEL_FORMAT}')", file.format),
            });
        }
        if file.format_version != MODEL_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedFormat {
                message: format!(
                    "format_version {} (expected {MODEL_FORMAT_VERSION})",
                    file.format_version
                ),
            });
        }
        if file.classes != [0, 1] {
            return Err(ArtifactError::InvalidParameter {
                name: "classes",
                message: format!("expected [0, 1], got {:?}", file.classes),
            });
        }
        if !file.init_score.is_finite() {
            return Err(ArtifactError::InvalidParameter {
                name: "init_score",
                message: format!("{} is not finite", file.init_score),
            });
        }
        if !(file.learning_rate.is_finite() && file.learning_rate > 0.0) {
            return Err(ArtifactError::InvalidParameter {
                name: "learning_rate",
                message: format!("{} must be a positive number", file.learning_rate),
            });
        }

        let schema = FeatureSchema::new(file.feature_names)?;
        for (index, tree) in file.trees.iter().enumerate() {
            tree.validate(index, schema.len())?;
        }

        Ok(Self {
            schema,
            init_score: file.init_score,
            learning_rate: file.learning_rate,
            trees: file.trees,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Raw log-odds score for a dense row in schema order.
    pub fn decision_function(&self, row: &[f64]) -> Result<f64, InferenceError> {
        if row.len() != self.schema.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.schema.len(),
                actual: row.len(),
            });
        }
        let boosted: f64 = self.trees.iter().map(|tree| tree.evaluate(row)).sum();
        Ok(self.init_score + self.learning_rate * boosted)
    }

    pub fn probability(raw: f64) -> f64 {
        1.0 / (1.0 + (-raw).exp())
    }

    pub fn label(raw: f64) -> RiskLabel {
        if raw >= 0.0 {
            RiskLabel::ElevatedRisk
        } else {
            RiskLabel::NoElevatedRisk
        }
    }
}
