use std::fs;

use anyhow::{Context, Result};
use geodiversity::{BasemapOptions, JsonRenderer, MapRenderer, basemap_view};
use tracing::info;

use crate::{cli::BasemapArgs, io};

pub fn run(args: &BasemapArgs) -> Result<()> {
    let options = match &args.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            serde_json::from_str::<BasemapOptions>(&text)
                .with_context(|| format!("Invalid basemap options in {}", path.display()))?
        }
        None => BasemapOptions::default(),
    };

    let table = io::read_csv(&args.input, &[])?;
    let view = basemap_view(&table, &args.lat, &args.lon, &options)?;
    let json = JsonRenderer.render(&view)?;

    match &args.output {
        Some(path) => {
            io::write_json(path, &json, args.force)?;
            info!("[basemap] wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }
    Ok(())
}
