use polars::prelude::*;

use crate::error::{DiversityError, Result};

/// Reads column `field` of `df` as strings, casting numeric identifiers
/// (e.g. FIPS codes parsed as integers) to their text form.
pub(crate) fn string_column(df: &DataFrame, field: &str, operation: &'static str) -> Result<StringChunked> {
    let column = df.column(field)
        .map_err(|_| DiversityError::schema(operation, field))?;
    let series = column.as_materialized_series()
        .cast(&DataType::String)
        .map_err(|_| DiversityError::schema(operation, field))?;
    Ok(series.str()?.clone())
}

/// Reads column `field` of `df` as `f64`, rejecting columns that cannot be
/// cast losslessly (e.g. free text).
pub(crate) fn float_column(df: &DataFrame, field: &str, operation: &'static str) -> Result<Float64Chunked> {
    let column = df.column(field)
        .map_err(|_| DiversityError::schema(operation, field))?;
    float_values(column)
        .map_err(|_| DiversityError::schema(operation, field))
}

/// Casts a numeric column to `f64`. Text and boolean columns are refused.
pub(crate) fn float_values(column: &Column) -> Result<Float64Chunked> {
    if matches!(column.dtype(), DataType::String | DataType::Boolean) {
        return Err(DiversityError::schema("common::float_values", column.name().as_str()));
    }
    let series = column.as_materialized_series().strict_cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ids_are_read_as_text() {
        let df = df!("code" => [1001i64, 1003], "n" => [1i64, 2]).unwrap();
        let ids = string_column(&df, "code", "test").unwrap();
        let ids = ids.into_iter().flatten().collect::<Vec<_>>();
        assert_eq!(ids, vec!["1001", "1003"]);
    }

    #[test]
    fn integer_counts_are_read_as_floats() {
        let df = df!("n" => [1i64, 2]).unwrap();
        let values = float_column(&df, "n", "test").unwrap();
        assert_eq!(values.into_iter().flatten().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn missing_field_is_a_schema_error() {
        let df = df!("n" => [1i64]).unwrap();
        let err = float_column(&df, "Observation", "reshape::restructure").unwrap_err();
        assert!(matches!(err, DiversityError::Schema { field, .. } if field == "Observation"));
    }

    #[test]
    fn text_counts_are_a_schema_error() {
        let df = df!("Observation" => ["five", "six"]).unwrap();
        assert!(float_column(&df, "Observation", "reshape::restructure").is_err());
    }
}
