use super::error::DataError;
use super::model::{Chart, Heatmap, Series};
use super::transform::{arithmetic_ticks, difference, reverse_rows, scale};

// ---------------------------------------------------------------------------
// Simulated-annealing scheduler: mean runtime (s) per processor/task count
// ---------------------------------------------------------------------------

/// Rows in measurement order: 2 processors first, 10 last.
/// Columns: 1000 … 8000 tasks.
const SCHEDULING_RUNTIMES: [[f64; 8]; 9] = [
    [0.0, 2.0, 4.0, 7.8, 12.4, 17.4, 24.4, 32.0],
    [0.0, 3.0, 6.8, 11.8, 19.6, 26.2, 36.2, 48.2],
    [1.0, 3.8, 9.6, 16.0, 24.4, 34.6, 46.6, 62.0],
    [1.0, 4.6, 9.8, 17.4, 27.6, 36.4, 49.4, 64.2],
    [1.0, 5.2, 12.8, 20.8, 33.6, 41.0, 59.6, 84.2],
    [1.0, 4.6, 11.6, 21.6, 33.8, 46.6, 68.0, 93.0],
    [1.0, 5.4, 13.0, 24.0, 37.0, 50.2, 71.0, 99.6],
    [1.0, 5.8, 13.4, 24.8, 39.2, 56.2, 73.2, 97.0],
    [1.2, 6.2, 14.4, 27.2, 41.8, 57.4, 80.2, 105.6],
];

const TASKS_START: i64 = 1000;
const TASKS_STEP: i64 = 1000;
const PROCESSORS_TOP: i64 = 10;

/// Runtime heatmap with the largest processor count on top.
pub fn scheduling_heatmap() -> Result<Heatmap, DataError> {
    let rows: Vec<Vec<f64>> = SCHEDULING_RUNTIMES.iter().map(|r| r.to_vec()).collect();
    let values = reverse_rows(rows);
    let cols = values.first().map(Vec::len).unwrap_or(0);

    let x_ticks = arithmetic_ticks(TASKS_START, TASKS_STEP, cols)
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    let y_ticks = arithmetic_ticks(PROCESSORS_TOP, -1, values.len())
        .into_iter()
        .map(|p| p.to_string())
        .collect();

    Heatmap::new(
        "Scheduler runtime",
        "Tasks number",
        "Processors number",
        x_ticks,
        y_ticks,
        values,
    )
}

// ---------------------------------------------------------------------------
// Genetic algorithm: ten runs with varying `i`
// ---------------------------------------------------------------------------

const WORST_METRIC: [f64; 10] = [51.0, 49.0, 55.0, 63.0, 62.0, 57.0, 65.0, 64.0, 60.0, 59.0];
const BEST_METRIC: [f64; 10] = [17.0, 23.0, 22.0, 33.0, 31.0, 46.0, 43.0, 39.0, 44.0, 40.0];
const RUN_TIMES_MS: [f64; 10] = [
    247469.0, 451862.0, 390433.0, 445767.0, 511697.0, 509975.0, 369228.0, 473860.0, 392375.0,
    376948.0,
];

const RUN_AXIS: &str = "i value";

/// Difference, best metric and execution time series, in display order.
pub fn genetic_runs() -> Result<Vec<Series>, DataError> {
    let diff = difference(&WORST_METRIC, &BEST_METRIC)?;
    let times = scale(&RUN_TIMES_MS, 1000.0);

    Ok(vec![
        Series::new(
            "Worst/best gap",
            RUN_AXIS,
            "Difference between worst and best solution",
            diff,
        )?,
        Series::new("Best metric", RUN_AXIS, "Best metric value", BEST_METRIC.to_vec())?,
        Series::new("Execution time", RUN_AXIS, "Execution time, s", times)?,
    ])
}

/// Every chart the viewer knows about: the heatmap, then the line charts.
pub fn all_charts() -> Result<Vec<Chart>, DataError> {
    let mut charts = vec![Chart::Heatmap(scheduling_heatmap()?)];
    charts.extend(genetic_runs()?.into_iter().map(Chart::Line));
    Ok(charts)
}
