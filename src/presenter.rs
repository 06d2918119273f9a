//! Time-series presenter: owns the session's data and hands out charts.

use crate::charts::{build_chart, ChartSelection, ChartSpec};
use crate::data::{derive_labels, Dataset, DisplayLabel, LabelError, TimeOverflow};

/// Loaded dataset plus its clock labels, derived once.
#[derive(Debug, Clone)]
pub struct TimeSeriesPresenter {
    dataset: Dataset,
    labels: Vec<DisplayLabel>,
}

impl TimeSeriesPresenter {
    pub fn new(dataset: Dataset, overflow: TimeOverflow) -> Result<Self, LabelError> {
        let labels = derive_labels(&dataset, overflow)?;
        Ok(Self { dataset, labels })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn labels(&self) -> &[DisplayLabel] {
        &self.labels
    }

    /// Build the chart for the selected view.
    pub fn chart(&self, selection: ChartSelection) -> ChartSpec {
        build_chart(&self.dataset, &self.labels, selection)
    }

    /// Short description for the status line, e.g. "48 samples, 12:00 AM – 11:30 PM".
    pub fn summary(&self) -> String {
        match (self.labels.first(), self.labels.last()) {
            (Some(first), Some(last)) => {
                format!("{} samples, {} – {}", self.dataset.len(), first, last)
            }
            _ => "No samples".to_string(),
        }
    }
}
