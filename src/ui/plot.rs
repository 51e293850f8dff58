use std::ops::RangeInclusive;

use eframe::egui::{Color32, Id, RichText, Stroke, Ui};
use egui_plot::{
    GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Polygon, Text, uniform_grid_spacer,
};

use crate::color::ColorScale;
use crate::data::model::{Chart, Heatmap, Series, tick_at};
use crate::state::AppState;

const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

// ---------------------------------------------------------------------------
// Chart view (central panel)
// ---------------------------------------------------------------------------

/// Plot memory key of a chart. Each chart keeps its own zoom and pan.
pub fn plot_id(chart: &Chart) -> Id {
    Id::new(("chart_plot", chart.slug()))
}

/// Render the selected chart in the central panel and return the bounds it
/// was drawn with.
pub fn chart_view(ui: &mut Ui, state: &AppState) -> Option<PlotBounds> {
    let chart = match state.current() {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No results to show");
            });
            return None;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(chart.title());
    });

    let id = plot_id(chart);
    match chart {
        Chart::Heatmap(h) => state
            .color_scale
            .as_ref()
            .map(|scale| heatmap_plot(ui, id, h, scale, state.show_values)),
        Chart::Line(s) => Some(line_plot(ui, id, s, state.show_grid)),
    }
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

fn heatmap_plot(
    ui: &mut Ui,
    id: Id,
    heatmap: &Heatmap,
    scale: &ColorScale,
    show_values: bool,
) -> PlotBounds {
    let x_ticks = heatmap.x_ticks.clone();
    let y_ticks = heatmap.y_ticks_bottom_up();

    Plot::new("heatmap_plot")
        .id(id)
        .x_axis_label(heatmap.x_label.as_str())
        .y_axis_label(heatmap.y_label.as_str())
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            tick_at(&x_ticks, mark.value).unwrap_or_default().to_string()
        })
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            tick_at(&y_ticks, mark.value).unwrap_or_default().to_string()
        })
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (row, cells) in heatmap.values.iter().enumerate() {
                for (col, &value) in cells.iter().enumerate() {
                    let [cx, cy] = heatmap.cell_center(row, col);
                    let corners: PlotPoints = vec![
                        [cx - 0.5, cy - 0.5],
                        [cx + 0.5, cy - 0.5],
                        [cx + 0.5, cy + 0.5],
                        [cx - 0.5, cy + 0.5],
                    ]
                    .into();

                    let color = scale.color_for(value);
                    plot_ui.polygon(
                        Polygon::new(corners)
                            .fill_color(color)
                            .stroke(Stroke::new(0.0, color)),
                    );

                    if show_values {
                        let label = RichText::new(format!("{value}"))
                            .color(scale.text_color_for(value))
                            .small();
                        plot_ui.text(Text::new(PlotPoint::new(cx, cy), label));
                    }
                }
            }
        })
        .transform
        .bounds()
        .to_owned()
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

fn line_plot(ui: &mut Ui, id: Id, series: &Series, show_grid: bool) -> PlotBounds {
    let n = series.len() as f64;

    Plot::new("line_plot")
        .id(id)
        .x_axis_label(series.x_label.as_str())
        .y_axis_label(series.y_label.as_str())
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let v = mark.value.round();
            if (mark.value - v).abs() < 1e-6 && v >= 0.0 && v < n {
                format!("{v:.0}")
            } else {
                String::new()
            }
        })
        .show_grid(show_grid)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(series.points()))
                .name(&series.y_label)
                .color(LINE_COLOR)
                .width(1.5);
            plot_ui.line(line);
        })
        .transform
        .bounds()
        .to_owned()
}
