//! Circadian Data Loader Module
//! Reads the JSON sample array (time / brightness / cct) into a Dataset.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file '{file_name}' was not found in {dir}")]
    DataNotFound { file_name: String, dir: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse circadian data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One reading of the lighting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Minutes since midnight.
    pub time: i64,
    pub brightness: f64,
    pub cct: f64,
}

/// Ordered samples for one session. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time column (minutes since midnight).
    pub fn times(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Brightness column.
    pub fn brightness(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.brightness).collect()
    }

    /// CCT column, in kelvin.
    pub fn cct(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.cct).collect()
    }

    /// First and last time offsets, if any samples exist.
    pub fn time_span(&self) -> Option<(i64, i64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.time, last.time))
    }

    /// Whether sample times never go backwards.
    pub fn is_monotonic(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].time <= w[1].time)
    }
}

/// Loads circadian sample files.
pub struct DataLoader;

impl DataLoader {
    /// Read and parse a JSON array of samples.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, LoaderError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Self::not_found(path),
            _ => LoaderError::Io {
                path: path.display().to_string(),
                source: err,
            },
        })?;

        let dataset = Self::parse(&content)?;
        log::info!("Loaded {} samples from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse sample JSON already held in memory.
    pub fn parse(content: &str) -> Result<Dataset, LoaderError> {
        let samples: Vec<Sample> = serde_json::from_str(content)?;
        let dataset = Dataset::new(samples);

        if !dataset.is_monotonic() {
            log::warn!("Sample times are not in ascending order; the chart may zig-zag");
        }

        Ok(dataset)
    }

    fn not_found(path: &Path) -> LoaderError {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => ".".to_string(),
        };
        LoaderError::DataNotFound { file_name, dir }
    }
}
