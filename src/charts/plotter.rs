//! Chart Plotter Module
//! Draws a ChartSpec as an interactive egui_plot chart (lines + markers).

use crate::charts::{ChartSpec, SeriesColor};
use egui::{Color32, RichText};
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoints, Points};

/// Aim for roughly this many labelled ticks across the x-axis.
const TARGET_X_TICKS: f64 = 12.0;

/// Draws chart specifications with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Screen colour for a named series colour.
    pub fn color(color: SeriesColor) -> Color32 {
        match color {
            SeriesColor::Blue => Color32::BLUE,
            SeriesColor::Red => Color32::RED,
        }
    }

    /// Map an x grid value back to its clock label.
    ///
    /// Only whole sample indices get a label; anything between samples is blank.
    pub fn tick_label(labels: &[String], value: f64) -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    /// Integer tick positions inside `bounds`, thinned to about
    /// [`TARGET_X_TICKS`] marks.
    pub fn tick_marks(bounds: (f64, f64), len: usize) -> Vec<GridMark> {
        if len == 0 {
            return Vec::new();
        }
        let (lo, hi) = bounds;
        let visible = (hi - lo).max(1.0);
        let step = (visible / TARGET_X_TICKS).ceil().max(1.0);

        let first = (lo.max(0.0) / step).ceil() * step;
        let last = hi.min((len - 1) as f64);

        let mut marks = Vec::new();
        let mut value = first;
        while value <= last {
            marks.push(GridMark {
                value,
                step_size: step,
            });
            value += step;
        }
        marks
    }

    /// Draw the chart. Fills the available width; `height` in points.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
        if spec.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        let x_labels = spec.x_labels().to_vec();
        let hover_labels = x_labels.clone();
        let len = x_labels.len();

        Plot::new(format!("chart_{}", spec.title))
            .height(height)
            .legend(Legend::default())
            .x_axis_label(spec.x_axis_title.as_str())
            .y_axis_label(spec.y_axis_title.as_str())
            .allow_scroll(false)
            .x_grid_spacer(move |input: GridInput| Self::tick_marks(input.bounds, len))
            .x_axis_formatter(move |mark, _range| Self::tick_label(&x_labels, mark.value))
            .label_formatter(move |name, value| {
                let x = Self::tick_label(&hover_labels, value.x);
                if name.is_empty() {
                    format!("{}: {:.1}", x, value.y)
                } else {
                    format!("{}\n{}: {:.1}", name, x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for series in &spec.series {
                    let color = Self::color(series.color);
                    let points: Vec<[f64; 2]> = series
                        .ys
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| [i as f64, y])
                        .collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(color)
                            .width(2.0)
                            .name(&series.name),
                    );

                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(3.0)
                            .color(color)
                            .name(&series.name),
                    );
                }
            });
    }
}
