use ndarray::{Array1, Array2};
use polars::frame::DataFrame;

use crate::error::Result;
use super::{ENTROPY_COLUMN, GeoId, ProportionMatrix};

/// A [`ProportionMatrix`] with one entropy score per area.
///
/// The `Entropy` column is a derived summary. It is not a category and must
/// not be fed back into the dataset scorer; the scorer rejects it.
#[derive(Debug, Clone)]
pub struct ScoredMatrix {
    proportions: ProportionMatrix,
    entropy: Array1<f64>, // len = n_areas
}

impl ScoredMatrix {
    pub(crate) fn new(proportions: ProportionMatrix, entropy: Array1<f64>) -> Self {
        debug_assert_eq!(entropy.len(), proportions.num_areas());
        Self { proportions, entropy }
    }

    /// Write the scored table: `geo_field`, one column per category, then `Entropy`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        self.proportions.labels.to_dataframe(self.proportions.values(), &[(ENTROPY_COLUMN, &self.entropy)])
    }

    #[inline] pub fn proportions(&self) -> &ProportionMatrix { &self.proportions }
    #[inline] pub fn values(&self) -> &Array2<f64> { self.proportions.values() }
    #[inline] pub fn entropy(&self) -> &Array1<f64> { &self.entropy }
    #[inline] pub fn geo_ids(&self) -> &[GeoId] { self.proportions.geo_ids() }
    #[inline] pub fn categories(&self) -> &[String] { self.proportions.categories() }

    /// Number of columns in the scored table, not counting the geo index: categories + 1.
    #[inline] pub fn num_columns(&self) -> usize { self.categories().len() + 1 }

    /// Entropy score of one area.
    pub fn entropy_of(&self, geo_id: &GeoId) -> Option<f64> {
        self.proportions.labels.row(geo_id).map(|i| self.entropy[i])
    }

    /// Areas paired with their scores, in row order.
    pub fn scores(&self) -> impl Iterator<Item = (&GeoId, f64)> + '_ {
        self.geo_ids().iter().zip(self.entropy.iter().copied())
    }
}
