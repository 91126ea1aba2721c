//! Demo defaults, optionally overridden from a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::mapper::Extent;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunables shared by all demos.
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub margin: f64,
    pub point_radius: f64,
    pub line_width: f64,
    pub regression: RegressionConfig,
    pub descent: DescentConfig,
    pub task: TaskConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    pub ticks: usize,
    /// Added below and above the y-range of data and line endpoints.
    pub y_padding: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    pub ticks: usize,
    pub x_extent: Extent,
    pub y_extent: Extent,
    pub start_weight: f64,
    pub steps: usize,
    pub curve_samples: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub ticks: usize,
    /// Added around both data extents of the task and trainer charts.
    pub padding: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            margin: 40.,
            point_radius: 3.,
            line_width: 2.,
            regression: RegressionConfig::default(),
            descent: DescentConfig::default(),
            task: TaskConfig::default(),
        }
    }
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            y_padding: 1.,
        }
    }
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            ticks: 4,
            x_extent: Extent::new(-4., 4.),
            y_extent: Extent::new(0., 16.),
            start_weight: 3.5,
            steps: 15,
            curve_samples: 161,
        }
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            padding: 0.5,
        }
    }
}

impl DemoConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = || path.display().to_string();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display(),
            source,
        })
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}
