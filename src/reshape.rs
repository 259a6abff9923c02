//! Long-to-wide reshaping of observation records.

use std::collections::BTreeSet;

use ahash::AHashMap;
use ndarray::Array2;
use polars::frame::DataFrame;
use tracing::debug;

use crate::{
    common,
    error::{DiversityError, Result},
    matrix::{GeoId, WideMatrix},
};

/// Default name of the count field in long-format census extracts.
pub const OBSERVATION_FIELD: &str = "Observation";

/// Field names of a long-format table: one row per (area, category, count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongFields {
    pub category: String,
    pub geo: String,
    pub observation: String,
}

impl LongFields {
    /// Fields for `category` and `geo`, with counts read from [`OBSERVATION_FIELD`].
    pub fn new(category: impl Into<String>, geo: impl Into<String>) -> Self {
        Self { category: category.into(), geo: geo.into(), observation: OBSERVATION_FIELD.to_owned() }
    }

    /// Read counts from `observation` instead of the default field.
    pub fn with_observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = observation.into();
        self
    }
}

/// Pivot long records into a wide matrix keyed by `geo_field`, with one column
/// per distinct (trimmed) value of `category_field`.
///
/// See [`restructure_with`].
pub fn restructure(records: &DataFrame, category_field: &str, geo_field: &str) -> Result<WideMatrix> {
    restructure_with(records, &LongFields::new(category_field, geo_field))
}

/// Pivot long records into a wide matrix.
///
/// - Category values are trimmed of leading/trailing whitespace; no other cleaning.
/// - Counts are summed per (area, category).
/// - Areas and categories come out in ascending order.
/// - Combinations absent from the input are explicit zeros.
/// - Rows with a null area or category are skipped; a null count adds nothing.
///
/// Fails with [`DiversityError::Schema`] if any of the three fields is missing,
/// with [`DiversityError::InvalidObservation`] on a negative or non-finite count,
/// and with [`DiversityError::InvalidColumns`] if a category is named like the geo field.
pub fn restructure_with(records: &DataFrame, fields: &LongFields) -> Result<WideMatrix> {
    const OP: &str = "reshape::restructure";

    let geo = common::string_column(records, &fields.geo, OP)?;
    let category = common::string_column(records, &fields.category, OP)?;
    let observation = common::float_column(records, &fields.observation, OP)?;

    let mut sums: AHashMap<(GeoId, String), f64> = AHashMap::new();
    let mut areas: BTreeSet<GeoId> = BTreeSet::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut skipped = 0usize;

    for ((geo_id, cat), value) in geo.into_iter().zip(category.into_iter()).zip(observation.into_iter()) {
        let (Some(geo_id), Some(cat)) = (geo_id, cat) else {
            skipped += 1;
            continue;
        };
        let cat = cat.trim();

        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(DiversityError::InvalidObservation {
                    operation: OP,
                    geo_id: geo_id.to_owned(),
                    category: cat.to_owned(),
                    value: v,
                });
            }
        }

        let geo_id = GeoId::new(geo_id);
        areas.insert(geo_id.clone());
        categories.insert(cat.to_owned());
        *sums.entry((geo_id, cat.to_owned())).or_insert(0.0) += value.unwrap_or(0.0);
    }

    let geo_ids = areas.into_iter().collect::<Vec<_>>();
    let categories = categories.into_iter().collect::<Vec<_>>();

    let rows: AHashMap<&GeoId, usize> = geo_ids.iter().enumerate().map(|(i, g)| (g, i)).collect();
    if categories.contains(&fields.geo) {
        return Err(DiversityError::invalid_columns(OP, vec![fields.geo.clone()]));
    }

    let cols: AHashMap<&str, usize> = categories.iter().enumerate().map(|(j, c)| (c.as_str(), j)).collect();

    let mut counts = Array2::<f64>::zeros((geo_ids.len(), categories.len()));
    for ((geo_id, cat), total) in &sums {
        counts[[rows[geo_id], cols[cat.as_str()]]] = *total;
    }

    debug!(
        areas = geo_ids.len(),
        categories = categories.len(),
        skipped,
        "[{OP}] reshaped {} records on '{}' by '{}'",
        records.height(), fields.category, fields.geo,
    );

    WideMatrix::new(fields.geo.clone(), geo_ids, categories, counts)
}
