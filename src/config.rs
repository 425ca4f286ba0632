//! Application configuration, loaded from an optional JSON file.

use crate::charts::{ChartType, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::data::{sample_series, DataPoint, LoaderError, SeriesLoader};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the startup series comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    /// Built-in demo series.
    Sample,
    Csv {
        path: PathBuf,
        label_column: String,
        value_column: String,
    },
    Json {
        path: PathBuf,
    },
}

impl DataSource {
    /// Load the series this source points to.
    pub fn load(&self) -> Result<Vec<DataPoint>, LoaderError> {
        match self {
            DataSource::Sample => Ok(sample_series()),
            DataSource::Csv {
                path,
                label_column,
                value_column,
            } => SeriesLoader::load_csv_series(path, label_column, value_column),
            DataSource::Json { path } => SeriesLoader::load_json(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
    pub chart_type: ChartType,
    pub window_size: [f32; 2],
    pub data: DataSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            chart_type: ChartType::Line,
            window_size: [1100.0, 700.0],
            data: DataSource::Sample,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = AppConfig::from_json(
            r#"{
                "width": 320,
                "chart_type": "bar",
                "data": {
                    "kind": "csv",
                    "path": "prices.csv",
                    "label_column": "date",
                    "value_column": "close"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.chart_type, ChartType::Bar);
        assert_eq!(
            config.data,
            DataSource::Csv {
                path: PathBuf::from("prices.csv"),
                label_column: "date".to_string(),
                value_column: "close".to_string(),
            }
        );
    }

    #[test]
    fn sample_source_loads_demo_series() {
        assert_eq!(DataSource::Sample.load().unwrap(), sample_series());
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = AppConfig::load(Path::new("/nonexistent/easy_chart.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/easy_chart.json"));
    }
}
