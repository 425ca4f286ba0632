//! Series Loader Module
//! Loads chart series from CSV (via Polars) or JSON files.

use crate::data::DataPoint;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON series: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Column not found: {0}")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
}

/// Handles series loading; keeps the last CSV frame around so the
/// label/value columns can be chosen after the file is read.
pub struct SeriesLoader {
    df: Option<DataFrame>,
}

impl Default for SeriesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Read a CSV file into a DataFrame (header row required).
    pub fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        debug!(path = %path.display(), rows = df.height(), "csv read");
        Ok(df)
    }

    /// Load a CSV file and keep it as the current frame.
    pub fn load_csv(&mut self, path: &Path) -> Result<&DataFrame, LoaderError> {
        self.df = Some(Self::read_csv(path)?);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Column names of the current frame.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract points from the current frame.
    pub fn series(&self, label_col: &str, value_col: &str) -> Result<Vec<DataPoint>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        Self::extract_series(df, label_col, value_col)
    }

    /// Build points from a label column and a numeric value column.
    ///
    /// Rows with a null label, null value or non-finite value are skipped.
    pub fn extract_series(
        df: &DataFrame,
        label_col: &str,
        value_col: &str,
    ) -> Result<Vec<DataPoint>, LoaderError> {
        let has_column = |name: &str| df.get_column_names().iter().any(|c| c.as_str() == name);
        for name in [label_col, value_col] {
            if !has_column(name) {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let label_column = df.column(label_col)?.cast(&DataType::String)?;
        let value_column = df.column(value_col)?.cast(&DataType::Float64)?;
        let labels = label_column.as_materialized_series().str()?;
        let values = value_column.as_materialized_series().f64()?;

        let mut points = Vec::with_capacity(df.height());
        let mut skipped = 0usize;
        for (label, value) in labels.into_iter().zip(values.into_iter()) {
            match (label, value) {
                (Some(label), Some(value)) if value.is_finite() => {
                    points.push(DataPoint::new(label, value));
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, label_col, value_col, "skipped rows without a usable label/value");
        }
        Ok(points)
    }

    /// Read a CSV file and extract a series in one step.
    pub fn load_csv_series(
        path: &Path,
        label_col: &str,
        value_col: &str,
    ) -> Result<Vec<DataPoint>, LoaderError> {
        let df = Self::read_csv(path)?;
        let points = Self::extract_series(&df, label_col, value_col)?;
        info!(path = %path.display(), points = points.len(), "series loaded from csv");
        Ok(points)
    }

    /// Load a JSON array of `{ "label": ..., "value": ... }` objects.
    pub fn load_json(path: &Path) -> Result<Vec<DataPoint>, LoaderError> {
        let reader = BufReader::new(File::open(path)?);
        let points: Vec<DataPoint> = serde_json::from_reader(reader)?;
        info!(path = %path.display(), points = points.len(), "series loaded from json");
        Ok(points)
    }

    /// Write a series in the format `load_json` reads.
    pub fn save_json(points: &[DataPoint], path: &Path) -> Result<(), LoaderError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, points)?;
        Ok(())
    }

    /// Set DataFrame directly (used for background loading)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }

    pub fn clear(&mut self) {
        self.df = None;
    }
}
