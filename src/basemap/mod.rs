//! Basemap view: the center, bounds and zoom handed to an external map renderer.
//!
//! Coordinates follow the `geo` convention: `x` is longitude, `y` is latitude.

mod extent;
mod view;

pub use extent::Extent;
pub use view::{BasemapOptions, BasemapView, JsonRenderer, MapRenderer, Padding, basemap_view, create_basemap};
