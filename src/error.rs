//! Error types for geodiversity.

use polars::error::PolarsError;
use thiserror::Error;

/// Errors surfaced by the reshape, scoring and basemap operations.
///
/// Every variant names the operation that failed, so messages read like
/// `[reshape::restructure] missing field 'Observation'`.
#[derive(Error, Debug)]
pub enum DiversityError {
    /// A required field is absent from the input table, or cannot be read as
    /// the type the operation needs.
    #[error("[{operation}] missing or unusable field '{field}'")]
    Schema { operation: &'static str, field: String },

    /// The matrix handed to the dataset scorer carries columns that are not
    /// categories of the variable under study.
    #[error("[{operation}] non-category column(s) in matrix: {}", .columns.join(", "))]
    InvalidColumns { operation: &'static str, columns: Vec<String> },

    /// A count is negative, NaN or infinite.
    #[error("[{operation}] invalid observation {value} for area '{geo_id}', category '{category}'")]
    InvalidObservation { operation: &'static str, geo_id: String, category: String, value: f64 },

    #[error("[{operation}] empty data: {reason}")]
    EmptyData { operation: &'static str, reason: String },

    #[error("[{operation}] duplicate area '{geo_id}'")]
    DuplicateGeoId { operation: &'static str, geo_id: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl DiversityError {
    pub(crate) fn schema(operation: &'static str, field: impl Into<String>) -> Self {
        Self::Schema { operation, field: field.into() }
    }

    pub(crate) fn invalid_columns(operation: &'static str, columns: Vec<String>) -> Self {
        Self::InvalidColumns { operation, columns }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, DiversityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_message_names_field_and_operation() {
        let err = DiversityError::schema("reshape::restructure", "Observation");
        assert_eq!(err.to_string(), "[reshape::restructure] missing or unusable field 'Observation'");
    }

    #[test]
    fn invalid_columns_message_lists_columns() {
        let err = DiversityError::invalid_columns("score::score_dataset", vec!["Total".into(), "Entropy".into()]);
        assert_eq!(err.to_string(), "[score::score_dataset] non-category column(s) in matrix: Total, Entropy");
    }

    #[test]
    fn invalid_observation_message_names_the_entry_point() {
        let err = DiversityError::InvalidObservation {
            operation: "matrix::from_dataframe",
            geo_id: "E06000001".into(),
            category: "White".into(),
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "[matrix::from_dataframe] invalid observation -1 for area 'E06000001', category 'White'"
        );
    }
}
