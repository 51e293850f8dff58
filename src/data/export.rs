use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::model::{Chart, Heatmap, Series};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a chart's data to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – heatmap as a labelled grid, line chart as `x,y` rows
/// * `.json` – the chart structure, tagged with its `kind`
pub fn export_chart(chart: &Chart, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = match ext.as_str() {
        "csv" | "json" => File::create(path)
            .with_context(|| format!("creating {}", path.display()))?,
        other => bail!("Unsupported file extension: .{other}"),
    };
    let mut out = BufWriter::new(file);

    if ext == "csv" {
        write_csv(chart, &mut out)?;
    } else {
        write_json(chart, &mut out)?;
    }
    out.flush().context("flushing export file")?;

    log::info!("Exported '{}' to {}", chart.title(), path.display());
    Ok(())
}

/// Write every chart as `<slug>.csv` and `<slug>.json` into `dir`.
/// Returns the paths written, in chart order.
pub fn export_all(charts: &[Chart], dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(charts.len() * 2);
    for chart in charts {
        for ext in ["csv", "json"] {
            let path = dir.join(format!("{}.{ext}", chart.slug()));
            export_chart(chart, &path)?;
            written.push(path);
        }
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// CSV layout:
/// * heatmap – header `y_label\x_label,<x ticks…>`, then one line per row
///   starting with its y tick
/// * line chart – header `x_label,y_label`, then one line per point
pub fn write_csv<W: Write>(chart: &Chart, writer: W) -> Result<()> {
    let mut csv_out = csv::Writer::from_writer(writer);
    match chart {
        Chart::Heatmap(h) => write_heatmap_csv(h, &mut csv_out)?,
        Chart::Line(s) => write_series_csv(s, &mut csv_out)?,
    }
    csv_out.flush().context("flushing CSV")?;
    Ok(())
}

fn write_heatmap_csv<W: Write>(h: &Heatmap, out: &mut csv::Writer<W>) -> Result<()> {
    let mut header = vec![format!("{}\\{}", h.y_label, h.x_label)];
    header.extend(h.x_ticks.iter().cloned());
    out.write_record(&header).context("writing CSV header")?;

    for (row, (tick, cells)) in h.y_ticks.iter().zip(&h.values).enumerate() {
        let mut record = vec![tick.clone()];
        record.extend(cells.iter().map(|v| v.to_string()));
        out.write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    Ok(())
}

fn write_series_csv<W: Write>(s: &Series, out: &mut csv::Writer<W>) -> Result<()> {
    out.write_record([s.x_label.as_str(), s.y_label.as_str()])
        .context("writing CSV header")?;
    for [x, y] in s.points() {
        out.write_record([x.to_string(), y.to_string()])
            .with_context(|| format!("writing CSV row {x}"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

pub fn write_json<W: Write>(chart: &Chart, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, chart).context("serialising chart to JSON")
}
