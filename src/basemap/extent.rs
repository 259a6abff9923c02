use geo::{Coord, Rect, coord};
use polars::frame::DataFrame;

use crate::{common, error::{DiversityError, Result}};

/// Mean center and tight bounding box of a set of locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub center: Coord<f64>,
    pub bounds: Rect<f64>,
}

/// Running (sum, count, min, max) of one axis.
#[derive(Clone, Copy)]
struct AxisStats { sum: f64, count: usize, min: f64, max: f64 }

impl AxisStats {
    fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let stats = values.into_iter()
            .filter(|v| !v.is_nan())
            .fold(AxisStats { sum: 0.0, count: 0, min: f64::INFINITY, max: f64::NEG_INFINITY }, |acc, v| {
                AxisStats { sum: acc.sum + v, count: acc.count + 1, min: acc.min.min(v), max: acc.max.max(v) }
            });
        (stats.count > 0).then_some(stats)
    }

    #[inline] fn mean(&self) -> f64 { self.sum / self.count as f64 }
}

impl Extent {
    /// Extent of `points` (x = longitude, y = latitude). `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Coord<f64>>) -> Option<Self> {
        let points = points.into_iter().collect::<Vec<_>>();
        let lon = AxisStats::of(points.iter().map(|c| c.x))?;
        let lat = AxisStats::of(points.iter().map(|c| c.y))?;
        Some(Self::from_axes(lat, lon))
    }

    /// Extent of the `latitude` and `longitude` columns of `table`.
    ///
    /// Each axis is summarized independently, skipping nulls and NaNs.
    pub fn from_dataframe(table: &DataFrame, latitude: &str, longitude: &str) -> Result<Self> {
        const OP: &str = "basemap::extent";

        let lat = common::float_column(table, latitude, OP)?;
        let lon = common::float_column(table, longitude, OP)?;

        let empty = |field: &str| DiversityError::EmptyData {
            operation: OP,
            reason: format!("no coordinates in column '{field}'"),
        };
        let lat = AxisStats::of(lat.into_iter().flatten()).ok_or_else(|| empty(latitude))?;
        let lon = AxisStats::of(lon.into_iter().flatten()).ok_or_else(|| empty(longitude))?;

        Ok(Self::from_axes(lat, lon))
    }

    fn from_axes(lat: AxisStats, lon: AxisStats) -> Self {
        Self {
            center: coord! { x: lon.mean(), y: lat.mean() },
            bounds: Rect::new(coord! { x: lon.min, y: lat.min }, coord! { x: lon.max, y: lat.max }),
        }
    }

    #[inline] pub fn min_lat(&self) -> f64 { self.bounds.min().y }
    #[inline] pub fn max_lat(&self) -> f64 { self.bounds.max().y }
    #[inline] pub fn min_lon(&self) -> f64 { self.bounds.min().x }
    #[inline] pub fn max_lon(&self) -> f64 { self.bounds.max().x }
}
