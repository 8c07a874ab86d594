//! The ordered feature columns a trained classifier expects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sdp_model::Field;

use crate::error::SchemaError;

/// Ordered, duplicate-free list of feature column names.
///
/// Owned by the loaded model artifact and treated as ground truth: encoded
/// vectors are always reshaped to exactly these columns in exactly this
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl FeatureSchema {
    /// # Errors
    ///
    /// Fails when the list is empty, contains a blank name, or repeats a
    /// name.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut positions = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(SchemaError::BlankColumn { index });
            }
            if positions.insert(column.clone(), index).is_some() {
                return Err(SchemaError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self { columns, positions })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Schema columns belonging to `field`, as `(position, name)` pairs in
    /// schema order.
    pub fn columns_for(&self, field: Field) -> impl Iterator<Item = (usize, &str)> {
        self.columns
            .iter()
            .enumerate()
            .filter(move |(_, column)| Field::for_column(column) == Some(field))
            .map(|(index, column)| (index, column.as_str()))
    }

    /// Schema columns not attributable to any form field.
    pub fn unattributed_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|column| Field::for_column(column).is_none())
            .map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = SchemaError;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.columns
    }
}
