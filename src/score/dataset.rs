use ndarray::{Array1, Axis};
use ndarray::parallel::prelude::*;
use polars::frame::DataFrame;
use tracing::debug;

use crate::{
    error::{DiversityError, Result},
    matrix::{ScoredMatrix, WideMatrix, reserved_columns},
};
use super::{entropy, proportions};

/// Proportions of every area plus an appended `Entropy` score column.
///
/// The matrix must contain only categories of the variable under study. A
/// totals column, or the `Entropy` column of an earlier run, would distort
/// both the proportions and the score, so those names fail with
/// [`DiversityError::InvalidColumns`]. Scoring is not idempotent: feed it
/// counts, never a scored table.
///
/// Row count and order are unchanged; the output has one more column than the input.
pub fn score_dataset(matrix: &WideMatrix) -> Result<ScoredMatrix> {
    const OP: &str = "score::score_dataset";

    let invalid = reserved_columns(matrix.categories().iter().map(String::as_str));
    if !invalid.is_empty() {
        return Err(DiversityError::invalid_columns(OP, invalid));
    }

    let proportions = proportions(matrix);
    let scores = proportions.values()
        .axis_iter(Axis(0))
        .into_par_iter()
        .map(|row| entropy(row.iter().copied()))
        .collect::<Vec<f64>>();

    debug!(areas = scores.len(), categories = matrix.num_categories(), "[{OP}] scored dataset");
    Ok(ScoredMatrix::new(proportions, Array1::from(scores)))
}

/// Score a wide DataFrame indexed by `geo_field` and return the scored table.
///
/// Equivalent to [`WideMatrix::from_dataframe`], [`score_dataset`] and
/// [`ScoredMatrix::to_dataframe`] in sequence.
pub fn score_dataframe(df: &DataFrame, geo_field: &str) -> Result<DataFrame> {
    let matrix = WideMatrix::from_dataframe(df, geo_field)?;
    score_dataset(&matrix)?.to_dataframe()
}
