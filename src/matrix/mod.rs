mod geo_id;
mod labels;
mod proportion;
mod scored;
mod wide;

pub use geo_id::GeoId;
pub use proportion::ProportionMatrix;
pub use scored::ScoredMatrix;
pub use wide::WideMatrix;

pub(crate) use labels::Labels;

/// Name of the derived score column appended by the dataset scorer.
pub const ENTROPY_COLUMN: &str = "Entropy";

/// Column names that are never categories: row totals and the derived score.
/// Any of these in a wide matrix would corrupt both the proportions and the score.
pub const RESERVED_COLUMNS: &[&str] = &["Total", "total", "TOTAL", "All", ENTROPY_COLUMN];

/// Return the names in `columns` that are reserved, in input order.
pub(crate) fn reserved_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    columns.into_iter()
        .filter(|name| RESERVED_COLUMNS.contains(name))
        .map(str::to_owned)
        .collect()
}
