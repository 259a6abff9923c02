pub mod basemap;
pub mod score;
