//! Data module - JSON loading and time labels

mod labels;
mod loader;

pub use labels::{
    derive_labels, format_12h, DisplayLabel, LabelError, TimeOverflow, MINUTES_PER_DAY,
};
pub use loader::{DataLoader, Dataset, LoaderError, Sample};
