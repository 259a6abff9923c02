use ndarray::{Array2, ArrayView1};
use polars::frame::DataFrame;

use crate::error::Result;
use super::{GeoId, Labels, WideMatrix};

/// Relative frequencies: each cell of a [`WideMatrix`] divided by its row total.
///
/// Rows sum to 1.0. A row whose total was zero holds NaN in every cell,
/// which marks "no observations" rather than a uniform absence.
#[derive(Debug, Clone)]
pub struct ProportionMatrix {
    pub(crate) labels: Labels,
    proportions: Array2<f64>, // (n_areas, n_categories)
}

impl ProportionMatrix {
    pub(crate) fn from_wide(matrix: &WideMatrix, proportions: Array2<f64>) -> Self {
        debug_assert_eq!(proportions.dim(), matrix.counts().dim());
        Self { labels: matrix.labels.clone(), proportions }
    }

    pub fn to_dataframe(&self) -> Result<DataFrame> {
        self.labels.to_dataframe(&self.proportions, &[])
    }

    #[inline] pub fn geo_field(&self) -> &str { &self.labels.geo_field }
    #[inline] pub fn geo_ids(&self) -> &[GeoId] { &self.labels.geo_ids }
    #[inline] pub fn categories(&self) -> &[String] { &self.labels.categories }
    #[inline] pub fn values(&self) -> &Array2<f64> { &self.proportions }
    #[inline] pub fn num_areas(&self) -> usize { self.labels.geo_ids.len() }

    pub fn row(&self, geo_id: &GeoId) -> Option<ArrayView1<'_, f64>> {
        self.labels.row(geo_id).map(|i| self.proportions.row(i))
    }

    pub fn get(&self, geo_id: &GeoId, category: &str) -> Option<f64> {
        Some(self.proportions[[self.labels.row(geo_id)?, self.labels.col(category)?]])
    }
}
