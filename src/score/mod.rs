//! Proportions, entropy and whole-dataset scoring.

mod dataset;
mod entropy;
mod proportion;

pub use dataset::{score_dataframe, score_dataset};
pub use entropy::entropy;
pub use proportion::{normalize_rows, proportions};
