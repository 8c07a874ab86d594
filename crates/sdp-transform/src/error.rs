#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("feature schema is empty")]
    Empty,

    #[error("feature schema column {index} is blank")]
    BlankColumn { index: usize },

    #[error("feature schema lists column '{column}' more than once")]
    DuplicateColumn { column: String },
}
