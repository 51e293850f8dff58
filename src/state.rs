use crate::color::ColorScale;
use crate::data::experiments;
use crate::data::model::Chart;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Every chart the viewer can show, in navigation order.
    pub charts: Vec<Chart>,

    /// Index into `charts` of the chart on screen.
    pub selected: usize,

    /// Colour scale for the selected chart, if it is a heatmap.
    pub color_scale: Option<ColorScale>,

    /// Draw grid lines on line charts.
    pub show_grid: bool,

    /// Print each cell's value inside the heatmap.
    pub show_values: bool,

    /// Show the raw numbers below the chart list.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            charts: Vec::new(),
            selected: 0,
            color_scale: None,
            show_grid: true,
            show_values: false,
            show_table: false,
            status_message: None,
        };
        match experiments::all_charts() {
            Ok(charts) => state.set_charts(charts),
            Err(e) => {
                log::error!("Failed to build charts: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
        state
    }
}

impl AppState {
    /// Replace the chart list and show the first chart.
    pub fn set_charts(&mut self, charts: Vec<Chart>) {
        log::info!("Loaded {} charts", charts.len());
        self.charts = charts;
        self.selected = 0;
        self.rebuild_color_scale();
    }

    /// The chart on screen, if any are loaded.
    pub fn current(&self) -> Option<&Chart> {
        self.charts.get(self.selected)
    }

    /// Show chart `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.charts.len() {
            return;
        }
        self.selected = index;
        self.rebuild_color_scale();
        log::debug!("Selected chart {index}: {:?}", self.charts[index].title());
    }

    /// Advance to the next chart, wrapping to the first.
    pub fn select_next(&mut self) {
        if !self.charts.is_empty() {
            self.select((self.selected + 1) % self.charts.len());
        }
    }

    /// Go back to the previous chart, wrapping to the last.
    pub fn select_previous(&mut self) {
        if !self.charts.is_empty() {
            let n = self.charts.len();
            self.select((self.selected + n - 1) % n);
        }
    }

    fn rebuild_color_scale(&mut self) {
        self.color_scale = match self.current() {
            Some(Chart::Heatmap(h)) => {
                let (min, max) = h.value_range();
                Some(ColorScale::rocket_r(min, max))
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_heatmap() {
        let state = AppState::default();
        assert_eq!(state.charts.len(), 4);
        assert_eq!(state.selected, 0);
        assert!(matches!(state.current(), Some(Chart::Heatmap(_))));
        assert!(state.color_scale.is_some());
        assert!(state.show_grid);
        assert!(!state.show_values);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = AppState::default();
        state.select_previous();
        assert_eq!(state.selected, 3);
        assert!(state.color_scale.is_none());
        state.select_next();
        assert_eq!(state.selected, 0);
        assert!(state.color_scale.is_some());
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = AppState::default();
        state.select(2);
        state.select(42);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_navigation_without_charts() {
        let mut state = AppState::default();
        state.set_charts(Vec::new());
        state.select_next();
        state.select_previous();
        assert!(state.current().is_none());
        assert!(state.color_scale.is_none());
    }
}
