use ahash::AHashMap;
use ndarray::{Array1, Array2};
use polars::prelude::*;

use crate::error::{DiversityError, Result};
use super::GeoId;

/// Row and column labels shared by every matrix derived from one wide table.
#[derive(Debug, Clone)]
pub(crate) struct Labels {
    pub(crate) geo_field: String,         // Name of the index column when written back to a DataFrame
    pub(crate) geo_ids: Vec<GeoId>,
    pub(crate) index: AHashMap<GeoId, usize>, // Map between geo_ids and row indices
    pub(crate) categories: Vec<String>,
}

impl Labels {
    pub(crate) fn new(geo_field: String, geo_ids: Vec<GeoId>, categories: Vec<String>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(geo_ids.len());
        for (row, geo_id) in geo_ids.iter().enumerate() {
            if index.insert(geo_id.clone(), row).is_some() {
                return Err(DiversityError::DuplicateGeoId {
                    operation: "matrix::new",
                    geo_id: geo_id.to_string(),
                });
            }
        }
        Ok(Self { geo_field, geo_ids, index, categories })
    }

    /// Check that `values` has one row per area and one column per category.
    pub(crate) fn check_shape(&self, values: &Array2<f64>) -> Result<()> {
        if values.nrows() != self.geo_ids.len() {
            return Err(DiversityError::DimensionMismatch { expected: self.geo_ids.len(), actual: values.nrows() });
        }
        if values.ncols() != self.categories.len() {
            return Err(DiversityError::DimensionMismatch { expected: self.categories.len(), actual: values.ncols() });
        }
        Ok(())
    }

    #[inline] pub(crate) fn row(&self, geo_id: &GeoId) -> Option<usize> { self.index.get(geo_id).copied() }

    #[inline]
    pub(crate) fn col(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Build a DataFrame: the geo index column, one column per category, then any `extra` columns.
    pub(crate) fn to_dataframe(&self, values: &Array2<f64>, extra: &[(&str, &Array1<f64>)]) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(1 + self.categories.len() + extra.len());
        columns.push(Column::new(
            self.geo_field.as_str().into(),
            self.geo_ids.iter().map(GeoId::id).collect::<Vec<&str>>(),
        ));
        for (j, category) in self.categories.iter().enumerate() {
            columns.push(Column::new(category.as_str().into(), values.column(j).to_vec()));
        }
        for (name, values) in extra {
            columns.push(Column::new((*name).into(), values.to_vec()));
        }
        Ok(DataFrame::new(columns)?)
    }
}
