//! Charts module - Chart assembly and rendering

mod plotter;
mod spec;

pub use plotter::ChartPlotter;
pub use spec::{
    build_chart, ChartSelection, ChartSpec, Series, SeriesColor, BRIGHTNESS_NAME, CCT_NAME,
    TICK_ANGLE, X_AXIS_TITLE,
};
