use geo::{Coord, Rect, coord};
use polars::frame::DataFrame;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use super::Extent;

/// Degrees added around the data extent to form the pannable bounds.
///
/// The defaults are asymmetric (more room to the north and east) so labels
/// drawn at the edge of the data are not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub south: f64, // subtracted from min latitude
    pub north: f64, // added to max latitude
    pub west: f64,  // subtracted from min longitude
    pub east: f64,  // added to max longitude
}

impl Default for Padding {
    fn default() -> Self {
        Self { south: 2.0, north: 5.0, west: 4.0, east: 5.0 }
    }
}

/// Zoom and padding settings for a basemap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasemapOptions {
    pub zoom_start: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub control_scale: bool,
    pub padding: Padding,
}

impl Default for BasemapOptions {
    fn default() -> Self {
        Self { zoom_start: 6, min_zoom: 6, max_zoom: 18, control_scale: true, padding: Padding::default() }
    }
}

/// Everything a renderer needs to draw a bounded, centered basemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasemapView {
    pub center: Coord<f64>,  // (lon, lat) mean of the data
    pub zoom_start: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub control_scale: bool,
    pub max_bounds: bool,    // Forbid panning outside `bounds`
    pub bounds: Rect<f64>,   // Padded extent
    pub fit_bounds: Rect<f64>, // Tight extent the initial view is fit to
}

impl BasemapView {
    /// Build a view over `extent` with the given options.
    pub fn new(extent: &Extent, options: &BasemapOptions) -> Self {
        let Padding { south, north, west, east } = options.padding;
        let (min, max) = (extent.bounds.min(), extent.bounds.max());
        Self {
            center: extent.center,
            zoom_start: options.zoom_start,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            control_scale: options.control_scale,
            max_bounds: true,
            bounds: Rect::new(coord! { x: min.x - west, y: min.y - south }, coord! { x: max.x + east, y: max.y + north }),
            fit_bounds: extent.bounds,
        }
    }

    /// Map options in Leaflet/folium vocabulary. Coordinate pairs are `[lat, lon]`.
    pub fn to_json(&self) -> Value {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let (fit_min, fit_max) = (self.fit_bounds.min(), self.fit_bounds.max());
        json!({
            "location": [self.center.y, self.center.x],
            "zoom_start": self.zoom_start,
            "min_zoom": self.min_zoom,
            "max_zoom": self.max_zoom,
            "control_scale": self.control_scale,
            "max_bounds": self.max_bounds,
            "min_lat": min.y,
            "max_lat": max.y,
            "min_lon": min.x,
            "max_lon": max.x,
            "fit_bounds": [[fit_min.y, fit_min.x], [fit_max.y, fit_max.x]],
        })
    }
}

/// An external map backend that turns a [`BasemapView`] into something renderable.
pub trait MapRenderer {
    type Output;

    fn render(&self, view: &BasemapView) -> Result<Self::Output>;
}

/// Renders a view as its JSON options, for backends that take a config document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl MapRenderer for JsonRenderer {
    type Output = Value;

    fn render(&self, view: &BasemapView) -> Result<Value> { Ok(view.to_json()) }
}

/// Compute the basemap view for the `latitude`/`longitude` columns of `table`.
pub fn basemap_view(table: &DataFrame, latitude: &str, longitude: &str, options: &BasemapOptions) -> Result<BasemapView> {
    let extent = Extent::from_dataframe(table, latitude, longitude)?;
    let view = BasemapView::new(&extent, options);
    debug!(
        lat = view.center.y, lon = view.center.x,
        "[basemap::basemap_view] centered over {} locations", table.height(),
    );
    Ok(view)
}

/// Build a basemap centered on the mean location of `table`, bounded by its
/// padded extent and fit to its tight extent, using the default zoom range
/// [6, 18], and hand it to `renderer`.
pub fn create_basemap<R: MapRenderer>(table: &DataFrame, latitude: &str, longitude: &str, renderer: &R) -> Result<R::Output> {
    let view = basemap_view(table, latitude, longitude, &BasemapOptions::default())?;
    renderer.render(&view)
}
