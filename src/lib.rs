//! Circadian Viewer - brightness and CCT schedule dashboard
//!
//! Loads a day of circadian lighting samples from JSON and plots brightness,
//! colour temperature, or both against the time of day.
//!
//! # Modules
//!
//! - [`data`]: sample loading and 12-hour time labels
//! - [`charts`]: chart specifications and egui_plot drawing
//! - [`presenter`]: turns a dataset and a view selection into a chart
//! - [`session`]: one-time start-up (config → data → presenter)
//! - [`config`]: optional TOML settings
//! - [`gui`]: eframe window

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod presenter;
pub mod session;

pub use charts::{build_chart, ChartSelection, ChartSpec};
pub use data::{derive_labels, format_12h, DataLoader, Dataset, LoaderError, Sample};
pub use presenter::TimeSeriesPresenter;
pub use session::{Session, SessionError};
