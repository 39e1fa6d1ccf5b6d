//! Reference ranges for the blood metrics the pipeline understands.

use serde::Serialize;

/// Normal interval for a named blood measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
    pub unit: &'static str,
}

/// Position of a single reading relative to a reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    BelowNormal,
    Normal,
    AboveNormal,
}

/// Metric columns with a known reference range, in lookup order.
///
/// Ranges are the standard adult values: hemoglobin 13.5-17.5 g/dL,
/// fasting glucose 70-100 mg/dL.
pub static METRIC_RANGES: [(&str, ReferenceRange); 2] = [
    (
        "hemoglobin",
        ReferenceRange {
            low: 13.5,
            high: 17.5,
            unit: "g/dL",
        },
    ),
    (
        "glucose",
        ReferenceRange {
            low: 70.0,
            high: 100.0,
            unit: "mg/dL",
        },
    ),
];

/// Look up the reference range for a metric column name.
pub fn reference_range(metric: &str) -> Option<ReferenceRange> {
    METRIC_RANGES
        .iter()
        .find(|(name, _)| *name == metric)
        .map(|(_, range)| *range)
}

impl ReferenceRange {
    /// Linear position of `value` within the range: 0.0 at the low bound,
    /// 1.0 at the high bound. Values outside the range fall outside [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.low) / (self.high - self.low)
    }

    /// Classify `value` against the range. The bounds themselves are normal.
    pub fn classify(&self, value: f64) -> RangeStatus {
        if value < self.low {
            RangeStatus::BelowNormal
        } else if value > self.high {
            RangeStatus::AboveNormal
        } else {
            RangeStatus::Normal
        }
    }
}
