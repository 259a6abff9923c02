use anyhow::{Context, Result};
use geodiversity::{LongFields, restructure_with, score_dataset};
use tracing::info;

use crate::{cli::ScoreArgs, io};

pub fn run(args: &ScoreArgs) -> Result<()> {
    info!("[score] {} -> {}", args.input.display(), args.output.display());

    let records = io::read_csv(&args.input, &[args.geo.as_str(), args.variable.as_str()])?;
    let fields = LongFields::new(&args.variable, &args.geo).with_observation(&args.observation);

    let wide = restructure_with(&records, &fields)
        .with_context(|| format!("Failed to reshape {}", args.input.display()))?;
    info!("[score] {} areas x {} categories", wide.num_areas(), wide.num_categories());

    let scored = score_dataset(&wide)?;
    let mut table = scored.to_dataframe()?;
    io::write_csv(&args.output, &mut table, args.force)?;

    info!("[score] wrote {} rows", table.height());
    Ok(())
}
