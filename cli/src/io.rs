//! CSV and JSON file handling for the commands.

use std::{fs::File, io::BufWriter, path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use polars::{io::{SerReader, SerWriter}, prelude::*};

/// Reads a CSV file from `path` into a Polars DataFrame.
///
/// Columns named in `text_fields` are read as strings so codes like `01001`
/// keep their leading zeros; the rest are inferred.
pub(crate) fn read_csv(path: &Path, text_fields: &[&str]) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::read_csv] Failed to open CSV file: {}", path.display()))?;

    let schema = Schema::from_iter(
        text_fields.iter().map(|name| Field::new((*name).into(), DataType::String)),
    );
    let options = CsvReadOptions::default()
        .with_schema_overwrite(Some(Arc::new(schema)));

    CsvReader::new(file)
        .with_options(options)
        .finish()
        .with_context(|| format!("[io::read_csv] Failed to read CSV from {}", path.display()))
}

/// Writes `df` as CSV to `path`, refusing stdout and existing files unless `force` is set.
pub(crate) fn write_csv(path: &Path, df: &mut DataFrame, force: bool) -> Result<()> {
    let file = create_output(path, force)?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(df)
        .with_context(|| format!("[io::write_csv] Failed to write CSV to {}", path.display()))
}

/// Writes `value` as pretty JSON to `path`.
pub(crate) fn write_json(path: &Path, value: &serde_json::Value, force: bool) -> Result<()> {
    let file = create_output(path, force)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("[io::write_json] Failed to write JSON to {}", path.display()))
}

/// Open `path` for writing.
fn create_output(path: &Path, force: bool) -> Result<File> {
    if path == Path::new("-") { bail!("stdout is not supported."); }
    if path.exists() && !force {
        bail!("Output already exists (use --force to overwrite): {}", path.display());
    }
    File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))
}
