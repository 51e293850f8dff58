use serde::Serialize;

use super::error::DataError;
use super::transform::index_ticks;

// ---------------------------------------------------------------------------
// Heatmap – a 2-D table of results with labelled axes
// ---------------------------------------------------------------------------

/// A rectangular table of values with one tick label per row and column.
///
/// Row 0 is drawn at the top of the picture, matching how a table reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One label per column, left to right.
    pub x_ticks: Vec<String>,
    /// One label per row, top to bottom.
    pub y_ticks: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Heatmap {
    /// Build a heatmap, checking that the table is rectangular, finite and
    /// that every row and column has exactly one tick label.
    pub fn new(
        title: &str,
        x_label: &str,
        y_label: &str,
        x_ticks: Vec<String>,
        y_ticks: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, DataError> {
        let cols = values.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(DataError::Empty);
        }

        for (row, cells) in values.iter().enumerate() {
            if cells.len() != cols {
                return Err(DataError::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            if let Some(col) = cells.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { row, col });
            }
        }

        if x_ticks.len() != cols {
            return Err(DataError::TickMismatch {
                axis: "x",
                ticks: x_ticks.len(),
                cells: cols,
            });
        }
        if y_ticks.len() != values.len() {
            return Err(DataError::TickMismatch {
                axis: "y",
                ticks: y_ticks.len(),
                cells: values.len(),
            });
        }

        Ok(Heatmap {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_ticks,
            y_ticks,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }

    pub fn cols(&self) -> usize {
        self.x_ticks.len()
    }

    /// Smallest and largest value in the table.
    pub fn value_range(&self) -> (f64, f64) {
        min_max(self.values.iter().flatten().copied())
    }

    /// Plot coordinates of a cell centre. Cells are unit squares; the top row
    /// sits at the highest y.
    pub fn cell_center(&self, row: usize, col: usize) -> [f64; 2] {
        [col as f64, (self.rows() - 1 - row) as f64]
    }

    /// Tick label for an integral x plot coordinate, if one exists there.
    pub fn x_tick_at(&self, x: f64) -> Option<&str> {
        tick_at(&self.x_ticks, x)
    }

    /// Tick label for an integral y plot coordinate, if one exists there.
    pub fn y_tick_at(&self, y: f64) -> Option<&str> {
        integral_index(y, self.rows()).map(|i| self.y_ticks[self.rows() - 1 - i].as_str())
    }

    /// Y tick labels in plot order, bottom row first.
    pub fn y_ticks_bottom_up(&self) -> Vec<String> {
        self.y_ticks.iter().rev().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Series – one line chart
// ---------------------------------------------------------------------------

/// A sequence of values plotted against their index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(
        title: &str,
        x_label: &str,
        y_label: &str,
        values: Vec<f64>,
    ) -> Result<Self, DataError> {
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFiniteValue { index });
        }
        Ok(Series {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// X tick positions: one per value, `0..n`.
    pub fn x_ticks(&self) -> Vec<f64> {
        index_ticks(self.len())
    }

    /// `[index, value]` pairs ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }

    pub fn value_range(&self) -> (f64, f64) {
        min_max(self.values.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Chart – anything the viewer can show
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Heatmap(Heatmap),
    Line(Series),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Heatmap(h) => &h.title,
            Chart::Line(s) => &s.title,
        }
    }

    /// File-name friendly version of the title.
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.title().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('_') {
                slug.push('_');
            }
        }
        slug.trim_end_matches('_').to_string()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Label at an integral plot position along an axis whose ticks sit at
/// `0, 1, …, n - 1`.
pub fn tick_at(ticks: &[String], pos: f64) -> Option<&str> {
    integral_index(pos, ticks.len()).map(|i| ticks[i].as_str())
}

fn integral_index(pos: f64, len: usize) -> Option<usize> {
    let rounded = pos.round();
    if (pos - rounded).abs() > 1e-6 || rounded < 0.0 || rounded >= len as f64 {
        return None;
    }
    Some(rounded as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    fn small() -> Heatmap {
        Heatmap::new(
            "t",
            "x",
            "y",
            vec!["a".into(), "b".into(), "c".into()],
            vec!["top".into(), "bottom".into()],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_heatmap_dimensions_and_range() {
        let h = small();
        assert_eq!(h.rows(), 2);
        assert_eq!(h.cols(), 3);
        assert_eq!(h.value_range(), (1.0, 6.0));
    }

    #[test]
    fn test_heatmap_rejects_ragged_rows() {
        let err = Heatmap::new(
            "t",
            "x",
            "y",
            labels(2),
            labels(2),
            vec![vec![1.0, 2.0], vec![3.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_heatmap_rejects_tick_mismatch() {
        let err = Heatmap::new("t", "x", "y", labels(3), labels(1), vec![vec![1.0, 2.0]])
            .unwrap_err();
        assert!(matches!(err, DataError::TickMismatch { axis: "x", ticks: 3, cells: 2 }));

        let err = Heatmap::new("t", "x", "y", labels(2), labels(2), vec![vec![1.0, 2.0]])
            .unwrap_err();
        assert!(matches!(err, DataError::TickMismatch { axis: "y", ticks: 2, cells: 1 }));
    }

    #[test]
    fn test_heatmap_rejects_empty_and_nan() {
        assert_eq!(
            Heatmap::new("t", "x", "y", vec![], vec![], vec![]).unwrap_err(),
            DataError::Empty
        );
        let err = Heatmap::new("t", "x", "y", labels(2), labels(1), vec![vec![1.0, f64::NAN]])
            .unwrap_err();
        assert_eq!(err, DataError::NonFinite { row: 0, col: 1 });
    }

    #[test]
    fn test_top_row_is_drawn_highest() {
        let h = small();
        assert_eq!(h.cell_center(0, 0), [0.0, 1.0]);
        assert_eq!(h.cell_center(1, 2), [2.0, 0.0]);
        assert_eq!(h.y_tick_at(1.0), Some("top"));
        assert_eq!(h.y_tick_at(0.0), Some("bottom"));
        assert_eq!(h.y_ticks_bottom_up(), vec!["bottom".to_string(), "top".to_string()]);
    }

    #[test]
    fn test_tick_at_matches_heatmap_lookup() {
        let h = small();
        let bottom_up = h.y_ticks_bottom_up();
        for pos in [0.0, 1.0, 2.0, 0.5, -1.0] {
            assert_eq!(tick_at(&h.x_ticks, pos), h.x_tick_at(pos));
            assert_eq!(tick_at(&bottom_up, pos), h.y_tick_at(pos));
        }
    }

    #[test]
    fn test_ticks_only_at_integral_positions() {
        let h = small();
        assert_eq!(h.x_tick_at(2.0), Some("c"));
        assert_eq!(h.x_tick_at(0.5), None);
        assert_eq!(h.x_tick_at(-1.0), None);
        assert_eq!(h.x_tick_at(3.0), None);
    }

    #[test]
    fn test_series_points_follow_index() {
        let s = Series::new("t", "i", "v", vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.points(), vec![[0.0, 3.0], [1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(s.x_ticks(), vec![0.0, 1.0, 2.0]);
        assert_eq!(s.value_range(), (1.0, 3.0));
        assert_eq!(Series::new("t", "i", "v", vec![]).unwrap_err(), DataError::Empty);
    }

    #[test]
    fn test_series_reports_index_of_non_finite_value() {
        let err = Series::new("t", "i", "v", vec![1.0, 2.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err, DataError::NonFiniteValue { index: 2 });
        assert_eq!(err.to_string(), "value 2 is not finite");
    }

    #[test]
    fn test_chart_slug() {
        let s = Series::new("Execution time, s", "i", "v", vec![1.0]).unwrap();
        assert_eq!(Chart::Line(s).slug(), "execution_time_s");
    }
}
