use ndarray::{Array2, ArrayView1};
use polars::prelude::*;

use crate::{common, error::{DiversityError, Result}};
use super::{GeoId, Labels, reserved_columns};

/// Per-area counts: one row per geographic area, one column per category.
///
/// Cells hold summed observation counts. An (area, category) combination
/// that never appeared in the long data is stored as an explicit zero.
#[derive(Debug, Clone)]
pub struct WideMatrix {
    pub(crate) labels: Labels,
    counts: Array2<f64>, // (n_areas, n_categories)
}

impl WideMatrix {
    /// Construct a wide matrix from labels and a count array of shape `(geo_ids.len(), categories.len())`.
    ///
    /// Counts must be finite and non-negative, and no category may share the
    /// geo field's name.
    pub fn new(geo_field: impl Into<String>, geo_ids: Vec<GeoId>, categories: Vec<String>, counts: Array2<f64>) -> Result<Self> {
        Self::build(geo_field.into(), geo_ids, categories, counts, "matrix::new")
    }

    fn build(geo_field: String, geo_ids: Vec<GeoId>, categories: Vec<String>, counts: Array2<f64>, operation: &'static str) -> Result<Self> {
        if categories.contains(&geo_field) {
            return Err(DiversityError::invalid_columns(operation, vec![geo_field]));
        }
        let labels = Labels::new(geo_field, geo_ids, categories)?;
        labels.check_shape(&counts)?;

        if let Some(((i, j), &value)) = counts.indexed_iter().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            return Err(DiversityError::InvalidObservation {
                operation,
                geo_id: labels.geo_ids[i].to_string(),
                category: labels.categories[j].clone(),
                value,
            });
        }
        Ok(Self { labels, counts })
    }

    /// Read a wide table whose columns are `geo_field` plus one numeric column per category.
    ///
    /// Rows keep their input order. Null cells are read as zero. Text or
    /// boolean columns, and columns named like totals or the derived
    /// `Entropy` score, are rejected with [`DiversityError::InvalidColumns`].
    /// A negative or non-finite cell is a [`DiversityError::InvalidObservation`].
    pub fn from_dataframe(df: &DataFrame, geo_field: &str) -> Result<Self> {
        const OP: &str = "matrix::from_dataframe";

        let ids = common::string_column(df, geo_field, OP)?;
        let geo_ids = ids.into_iter()
            .map(|id| id.map(GeoId::new).ok_or_else(|| DiversityError::schema(OP, geo_field)))
            .collect::<Result<Vec<_>>>()?;

        let others = df.get_columns().iter()
            .filter(|col| col.name().as_str() != geo_field)
            .collect::<Vec<_>>();

        let mut invalid = reserved_columns(others.iter().map(|col| col.name().as_str()));
        let mut categories = Vec::with_capacity(others.len());
        let mut values = Vec::with_capacity(others.len());
        for col in others {
            let name = col.name().as_str();
            if invalid.iter().any(|r| r == name) { continue }
            match common::float_values(col) {
                Ok(chunked) => {
                    categories.push(name.to_owned());
                    values.push(chunked);
                }
                Err(_) => invalid.push(name.to_owned()),
            }
        }
        if !invalid.is_empty() {
            return Err(DiversityError::invalid_columns(OP, invalid));
        }

        let mut counts = Array2::<f64>::zeros((geo_ids.len(), categories.len()));
        for (j, chunked) in values.iter().enumerate() {
            for (i, value) in chunked.into_iter().enumerate() {
                counts[[i, j]] = value.unwrap_or(0.0);
            }
        }

        Self::build(geo_field.to_owned(), geo_ids, categories, counts, OP)
    }

    /// Write the matrix as a DataFrame: `geo_field` first, then one `Float64` column per category.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        self.labels.to_dataframe(&self.counts, &[])
    }

    #[inline] pub fn geo_field(&self) -> &str { &self.labels.geo_field }
    #[inline] pub fn geo_ids(&self) -> &[GeoId] { &self.labels.geo_ids }
    #[inline] pub fn categories(&self) -> &[String] { &self.labels.categories }
    #[inline] pub fn counts(&self) -> &Array2<f64> { &self.counts }

    /// Number of areas (rows).
    #[inline] pub fn num_areas(&self) -> usize { self.labels.geo_ids.len() }

    /// Number of categories (columns).
    #[inline] pub fn num_categories(&self) -> usize { self.labels.categories.len() }

    /// Counts for one area, in category order.
    pub fn row(&self, geo_id: &GeoId) -> Option<ArrayView1<'_, f64>> {
        self.labels.row(geo_id).map(|i| self.counts.row(i))
    }

    /// Count for one (area, category) pair.
    pub fn get(&self, geo_id: &GeoId, category: &str) -> Option<f64> {
        Some(self.counts[[self.labels.row(geo_id)?, self.labels.col(category)?]])
    }
}
