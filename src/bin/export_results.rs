use std::path::Path;

use anyhow::{Context, Result};
use experiment_plots::data::experiments;
use experiment_plots::data::export::export_all;

fn main() -> Result<()> {
    env_logger::init();

    let charts = experiments::all_charts().context("building charts")?;
    let written = export_all(&charts, Path::new("."))?;

    log::info!("Exported {} charts to {} files", charts.len(), written.len());
    Ok(())
}
