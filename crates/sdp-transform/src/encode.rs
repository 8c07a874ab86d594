//! One-hot encoding of a record and reconciliation against a feature schema.
//!
//! Every field, numeric ones included, is encoded by its literal value:
//! `age = 20` becomes the column `age_20`, `cgpa = 7.5` becomes `cgpa_7.5`.
//! The paired classifier was fit against exactly these columns, so values
//! are never binned or passed through as numbers.
//!
//! Reconciliation is total. A synthesized column the schema does not know
//! (a value never seen in training) is dropped, leaving every column of that
//! field at zero. That is expected behavior, not an error.

use serde::Serialize;
use tracing::debug;

use sdp_model::{Field, RawInputRecord};

use crate::schema::FeatureSchema;

/// A synthesized `{field}_{value}` column with indicator 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneHotColumn {
    pub field: Field,
    pub column: String,
}

impl OneHotColumn {
    pub fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            column: format!("{}_{}", field.column_name(), value),
        }
    }
}

/// One active column per field, in [`Field::ALL`] order.
pub fn one_hot(record: &RawInputRecord) -> Vec<OneHotColumn> {
    record
        .field_values()
        .iter()
        .map(|(field, value)| OneHotColumn::new(*field, value))
        .collect()
}

/// Indicator vector aligned to a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFeatureVector<'s> {
    schema: &'s FeatureSchema,
    indicators: Vec<bool>,
}

impl<'s> EncodedFeatureVector<'s> {
    /// All-zero vector for `schema`.
    pub fn zeros(schema: &'s FeatureSchema) -> Self {
        Self {
            schema,
            indicators: vec![false; schema.len()],
        }
    }

    pub fn schema(&self) -> &'s FeatureSchema {
        self.schema
    }

    pub fn columns(&self) -> &'s [String] {
        self.schema.columns()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Indicator for `column` (0 or 1), `None` if the schema lacks it.
    pub fn get(&self, column: &str) -> Option<u8> {
        self.schema
            .position(column)
            .map(|index| u8::from(self.indicators[index]))
    }

    /// `(column, indicator)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s str, u8)> + '_ {
        self.schema
            .columns()
            .iter()
            .zip(&self.indicators)
            .map(|(column, set)| (column.as_str(), u8::from(*set)))
    }

    /// Columns set to 1, in schema order.
    pub fn active_columns(&self) -> Vec<&'s str> {
        self.iter()
            .filter(|(_, value)| *value == 1)
            .map(|(column, _)| column)
            .collect()
    }

    /// Dense numeric row for tree evaluation.
    pub fn to_f64_row(&self) -> Vec<f64> {
        self.indicators
            .iter()
            .map(|set| if *set { 1.0 } else { 0.0 })
            .collect()
    }

    fn set(&mut self, index: usize) {
        self.indicators[index] = true;
    }
}

/// Result of aligning synthesized columns with a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<'s> {
    pub vector: EncodedFeatureVector<'s>,
    /// Synthesized columns with no schema counterpart, in field order.
    pub dropped: Vec<OneHotColumn>,
}

/// Reshape synthesized columns to `schema`: schema columns present in
/// `active` become 1, all others 0, and columns unknown to the schema are
/// dropped.
pub fn reconcile<'s>(active: &[OneHotColumn], schema: &'s FeatureSchema) -> Reconciled<'s> {
    let mut vector = EncodedFeatureVector::zeros(schema);
    let mut dropped = Vec::new();
    for column in active {
        match schema.position(&column.column) {
            Some(index) => vector.set(index),
            None => dropped.push(column.clone()),
        }
    }
    Reconciled { vector, dropped }
}

/// Encode `record` and align it with `schema`.
pub fn build_feature_vector<'s>(
    record: &RawInputRecord,
    schema: &'s FeatureSchema,
) -> Reconciled<'s> {
    let active = one_hot(record);
    let reconciled = reconcile(&active, schema);
    for column in &reconciled.dropped {
        // Column names embed the submitted value; only the field is logged.
        debug!(
            field = %column.field,
            "value not present in model schema, encoded as all-zero"
        );
    }
    debug!(
        schema_columns = schema.len(),
        active_columns = active.len() - reconciled.dropped.len(),
        dropped_columns = reconciled.dropped.len(),
        "feature vector built"
    );
    reconciled
}
