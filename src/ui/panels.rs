use eframe::egui::{self, Color32, RichText, ScrollArea, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ColorScale;
use crate::data::model::{Chart, Heatmap, Series};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart list, colour bar, raw values
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Charts");
    ui.separator();

    if state.charts.is_empty() {
        ui.label("No charts available.");
        return;
    }

    let mut clicked = None;
    for (i, chart) in state.charts.iter().enumerate() {
        if ui.selectable_label(state.selected == i, chart.title()).clicked() {
            clicked = Some(i);
        }
    }
    if let Some(i) = clicked {
        state.select(i);
    }
    ui.separator();

    if let Some(scale) = &state.color_scale {
        ui.strong("Scale");
        color_bar(ui, scale);
        ui.separator();
    }

    ui.checkbox(&mut state.show_table, "Show values table");
    if !state.show_table {
        return;
    }

    let Some(chart) = state.current() else {
        return;
    };
    ScrollArea::horizontal()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match chart {
            Chart::Heatmap(h) => heatmap_table(ui, h),
            Chart::Line(s) => series_table(ui, s),
        });
}

/// Vertical strip of the colour scale, high values on top.
fn color_bar(ui: &mut Ui, scale: &ColorScale) {
    const STEPS: usize = 64;
    let entries = scale.legend_entries(STEPS);

    ui.horizontal(|ui: &mut Ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 160.0), Sense::hover());
        let step_h = rect.height() / STEPS as f32;
        for (i, (_, color)) in entries.iter().rev().enumerate() {
            let top = rect.top() + i as f32 * step_h;
            let band = egui::Rect::from_min_max(
                egui::pos2(rect.left(), top),
                egui::pos2(rect.right(), top + step_h + 0.5),
            );
            ui.painter().rect_filled(band, 0.0, *color);
        }

        ui.vertical(|ui: &mut Ui| {
            ui.label(format!("{:.1}", scale.max));
            ui.add_space(rect.height() - 2.0 * ui.spacing().interact_size.y);
            ui.label(format!("{:.1}", scale.min));
        });
    });
}

fn heatmap_table(ui: &mut Ui, heatmap: &Heatmap) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::auto(), heatmap.cols())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong(format!("{} \\ {}", heatmap.y_label, heatmap.x_label));
            });
            for tick in &heatmap.x_ticks {
                header.col(|ui: &mut Ui| {
                    ui.strong(tick);
                });
            }
        })
        .body(|mut body| {
            for (tick, cells) in heatmap.y_ticks.iter().zip(&heatmap.values) {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.strong(tick);
                    });
                    for value in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{value}"));
                        });
                    }
                });
            }
        });
}

fn series_table(ui: &mut Ui, series: &Series) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong(&series.x_label);
            });
            header.col(|ui: &mut Ui| {
                ui.strong(&series.y_label);
            });
        })
        .body(|mut body| {
            for [x, y] in series.points() {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{x}"));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{y}"));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let has_chart = state.current().is_some();
            if ui.add_enabled(has_chart, egui::Button::new("Export CSV…")).clicked() {
                export_dialog(state, "csv");
                ui.close_menu();
            }
            if ui.add_enabled(has_chart, egui::Button::new("Export JSON…")).clicked() {
                export_dialog(state, "json");
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("◀").on_hover_text("Previous chart (←)").clicked() {
            state.select_previous();
        }
        if !state.charts.is_empty() {
            ui.label(format!("{} / {}", state.selected + 1, state.charts.len()));
        }
        if ui.button("▶").on_hover_text("Next chart (→)").clicked() {
            state.select_next();
        }

        ui.separator();

        let is_heatmap = state.current().map(|c| matches!(c, Chart::Heatmap(_)));
        match is_heatmap {
            Some(true) => {
                if ui.selectable_label(state.show_values, "Annotate cells").clicked() {
                    state.show_values = !state.show_values;
                }
            }
            Some(false) => {
                if ui.selectable_label(state.show_grid, "Grid").clicked() {
                    state.show_grid = !state.show_grid;
                }
            }
            None => {}
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState, extension: &str) {
    let Some(chart) = state.current() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export chart data")
        .set_file_name(format!("{}.{extension}", chart.slug()))
        .add_filter(extension.to_ascii_uppercase(), &[extension])
        .save_file();

    if let Some(path) = file {
        match crate::data::export::export_chart(chart, &path) {
            Ok(()) => {
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export chart: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
