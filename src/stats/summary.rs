//! Chart Summary Module
//! Min/mid/max statistics that drive the vertical axis and extremum markers.

use crate::data::DataPoint;
use serde::Serialize;

/// Derived statistics over a point sequence.
///
/// Recomputed on every render; all values are `0.0` for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSummary {
    pub min: f64,
    pub max: f64,
    pub mid: f64,
    /// Position of the first point holding `max`.
    pub max_index: Option<usize>,
    /// Position of the first point holding `min`.
    pub min_index: Option<usize>,
}

impl Default for ChartSummary {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            mid: 0.0,
            max_index: None,
            min_index: None,
        }
    }
}

impl ChartSummary {
    /// Vertical axis tick values: `[min, mid, max]`.
    pub fn ticks(&self) -> [f64; 3] {
        [self.min, self.mid, self.max]
    }

    /// True when no point contributed to the summary.
    pub fn is_empty(&self) -> bool {
        self.max_index.is_none()
    }
}

/// Midpoint of `min` and `max` that stays finite for any finite pair.
fn midpoint(min: f64, max: f64) -> f64 {
    let mid = (min + max) / 2.0;
    if mid.is_finite() {
        mid
    } else {
        // The sum overflowed, so both values are far from the subnormal range
        min / 2.0 + max / 2.0
    }
}

/// Compute min, max and midpoint of `points`.
///
/// Ties keep the first occurrence for both extremes.
pub fn summarize(points: &[DataPoint]) -> ChartSummary {
    let Some(first) = points.first() else {
        return ChartSummary::default();
    };

    let mut max_index = 0;
    let mut min_index = 0;
    let mut max = first.value;
    let mut min = first.value;

    for (i, point) in points.iter().enumerate().skip(1) {
        if point.value > max {
            max = point.value;
            max_index = i;
        }
        if point.value < min {
            min = point.value;
            min_index = i;
        }
    }

    ChartSummary {
        min,
        max,
        mid: midpoint(min, max),
        max_index: Some(max_index),
        min_index: Some(min_index),
    }
}

/// Two-decimal formatting used for tick labels and annotations.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}
