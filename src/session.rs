//! Session start-up: resolve the data file, load it, and build the presenter.
//!
//! Runs exactly once, from `main`, before the window opens.

use crate::config::{exe_dir, ViewerConfig};
use crate::data::{DataLoader, LabelError, LoaderError};
use crate::presenter::TimeSeriesPresenter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Label(#[from] LabelError),
}

impl SessionError {
    /// True when the data file does not exist.
    pub fn is_data_not_found(&self) -> bool {
        matches!(self, SessionError::Loader(LoaderError::DataNotFound { .. }))
    }
}

/// One viewer session's immutable state.
#[derive(Debug, Clone)]
pub struct Session {
    data_path: PathBuf,
    presenter: TimeSeriesPresenter,
}

impl Session {
    /// Load the configured data file and derive the chart labels.
    pub fn initialize(config: &ViewerConfig) -> Result<Self, SessionError> {
        let candidates = Self::candidate_paths(&config.data_file, exe_dir().as_deref());
        let data_path = Self::pick_existing(&candidates);
        Self::from_path(data_path, config)
    }

    /// Same as [`Self::initialize`] with an already-resolved data path.
    pub fn from_path(data_path: PathBuf, config: &ViewerConfig) -> Result<Self, SessionError> {
        log::info!("Reading circadian data from {}", data_path.display());
        let dataset = DataLoader::load(&data_path)?;
        let presenter = TimeSeriesPresenter::new(dataset, config.time_overflow)?;
        Ok(Self {
            data_path,
            presenter,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn presenter(&self) -> &TimeSeriesPresenter {
        &self.presenter
    }

    /// Where to look for `data_file`: as-is when absolute, otherwise next to
    /// the executable first, then the working directory.
    pub fn candidate_paths(data_file: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
        if data_file.is_absolute() {
            return vec![data_file.to_path_buf()];
        }
        let mut paths = Vec::new();
        if let Some(dir) = exe_dir {
            paths.push(dir.join(data_file));
        }
        paths.push(data_file.to_path_buf());
        paths
    }

    /// First candidate that exists, or the first candidate so that the
    /// not-found error names the executable's directory.
    fn pick_existing(candidates: &[PathBuf]) -> PathBuf {
        candidates
            .iter()
            .find(|p| p.exists())
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_default()
    }
}
