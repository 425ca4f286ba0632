//! Data Point Module
//! A single (label, value) sample and the demo series.

use serde::{Deserialize, Serialize};

/// One sample plotted on the chart.
///
/// `label` is an ordinal category (usually a date); position in the
/// sequence decides its place on the horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Demo price series shown when no data source is configured.
pub fn sample_series() -> Vec<DataPoint> {
    [10.0, 11.0, 10.0, 13.0, 12.0, 17.0, 15.0, 13.0, 11.0, 10.0]
        .iter()
        .enumerate()
        .map(|(i, &price)| DataPoint::new((i + 1).to_string(), price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_series_labels_run_one_to_ten() {
        let series = sample_series();
        assert_eq!(series.len(), 10);
        assert_eq!(series[0], DataPoint::new("1", 10.0));
        assert_eq!(series[5], DataPoint::new("6", 17.0));
        assert_eq!(series[9], DataPoint::new("10", 10.0));
    }

    #[test]
    fn deserializes_from_label_value_object() {
        let point: DataPoint = serde_json::from_str(r#"{"label":"2024-01-02","value":12.5}"#)
            .expect("valid point json");
        assert_eq!(point, DataPoint::new("2024-01-02", 12.5));
    }
}
