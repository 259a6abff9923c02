#![doc = "geodiversity public API"]
//! Entropy-style diversity scores for categorical demographic counts by area.
//!
//! ```no_run
//! # fn demo(census: &polars::frame::DataFrame, centroids: &polars::frame::DataFrame) -> geodiversity::Result<()> {
//! use geodiversity::{JsonRenderer, create_basemap, restructure, score_dataset};
//!
//! let wide = restructure(census, "Ethnic group", "Lower tier local authorities Code")?;
//! let scored = score_dataset(&wide)?;
//! let table = scored.to_dataframe()?;
//! let map = create_basemap(centroids, "lat", "long", &JsonRenderer)?;
//! # Ok(()) }
//! ```
mod basemap;
mod common;
mod error;
mod matrix;
mod reshape;
mod score;

#[doc(inline)]
pub use error::{DiversityError, Result};

#[doc(inline)]
pub use matrix::{ENTROPY_COLUMN, GeoId, ProportionMatrix, RESERVED_COLUMNS, ScoredMatrix, WideMatrix};

#[doc(inline)]
pub use reshape::{LongFields, OBSERVATION_FIELD, restructure, restructure_with};

#[doc(inline)]
pub use score::{entropy, normalize_rows, proportions, score_dataframe, score_dataset};

#[doc(inline)]
pub use basemap::{BasemapOptions, BasemapView, Extent, JsonRenderer, MapRenderer, Padding, basemap_view, create_basemap};
