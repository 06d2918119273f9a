//! Chart Specification Module
//! Renderer-independent description of what to plot for each view.

use crate::data::{Dataset, DisplayLabel};
use serde::Serialize;
use std::fmt;

/// Shared x-axis title for every view.
pub const X_AXIS_TITLE: &str = "Time (AM/PM)";
/// Tick label rotation in degrees. Cosmetic only.
pub const TICK_ANGLE: f64 = -45.0;

pub const BRIGHTNESS_NAME: &str = "Brightness";
pub const CCT_NAME: &str = "CCT (Color Temperature)";

/// Which chart the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChartSelection {
    #[default]
    BrightnessOnly,
    CctOnly,
    Overlay,
}

impl ChartSelection {
    /// All views, in dropdown order.
    pub const ALL: [ChartSelection; 3] = [
        ChartSelection::BrightnessOnly,
        ChartSelection::CctOnly,
        ChartSelection::Overlay,
    ];

    /// Dropdown caption.
    pub fn caption(self) -> &'static str {
        match self {
            ChartSelection::BrightnessOnly => "Brightness vs Time",
            ChartSelection::CctOnly => "CCT vs Time",
            ChartSelection::Overlay => "Brightness & CCT Overlapping",
        }
    }

    pub fn from_caption(caption: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.caption() == caption)
    }
}

impl fmt::Display for ChartSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Named series colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Red,
}

impl SeriesColor {
    pub fn name(self) -> &'static str {
        match self {
            SeriesColor::Blue => "blue",
            SeriesColor::Red => "red",
        }
    }
}

/// One plotted trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub xs: Vec<DisplayLabel>,
    pub ys: Vec<f64>,
    pub name: String,
    pub color: SeriesColor,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub series: Vec<Series>,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub tick_angle: f64,
}

impl ChartSpec {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.ys.is_empty())
    }

    /// Shared x labels (every series uses the same ones).
    pub fn x_labels(&self) -> &[DisplayLabel] {
        self.series.first().map(|s| s.xs.as_slice()).unwrap_or(&[])
    }
}

fn brightness_series(dataset: &Dataset, labels: &[DisplayLabel]) -> Series {
    Series {
        xs: labels.to_vec(),
        ys: dataset.brightness(),
        name: BRIGHTNESS_NAME.to_string(),
        color: SeriesColor::Blue,
    }
}

fn cct_series(dataset: &Dataset, labels: &[DisplayLabel]) -> Series {
    Series {
        xs: labels.to_vec(),
        ys: dataset.cct(),
        name: CCT_NAME.to_string(),
        color: SeriesColor::Red,
    }
}

/// Assemble the chart for `selection`.
///
/// `labels` must come from [`crate::data::derive_labels`] on the same dataset.
pub fn build_chart(
    dataset: &Dataset,
    labels: &[DisplayLabel],
    selection: ChartSelection,
) -> ChartSpec {
    let (series, title, y_axis_title) = match selection {
        ChartSelection::BrightnessOnly => (
            vec![brightness_series(dataset, labels)],
            "Time vs Brightness",
            "Brightness Level",
        ),
        ChartSelection::CctOnly => (
            vec![cct_series(dataset, labels)],
            "Time vs CCT",
            "CCT (K)",
        ),
        ChartSelection::Overlay => (
            vec![
                brightness_series(dataset, labels),
                cct_series(dataset, labels),
            ],
            "Brightness & CCT Overlapping",
            "Values",
        ),
    };

    ChartSpec {
        series,
        title: title.to_string(),
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: y_axis_title.to_string(),
        tick_angle: TICK_ANGLE,
    }
}
