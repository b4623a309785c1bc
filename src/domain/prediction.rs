//! Wire types for the prediction service.

use serde::{Deserialize, Serialize};

/// Request body for the `/predict` endpoint. The `features` array is in
/// [`crate::domain::form::FEATURE_KEYS`] order. Built fresh per submission
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub features: [f64; 6],
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
}

/// Response body from the prediction service. Treated as opaque beyond the
/// fields rendered here; extra fields (e.g. confidence intervals) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub tree_prediction: f64,
    pub prophet_prediction: f64,
    pub combined_rate: f64,
    pub tree_metrics: TreeMetrics,
}

/// Predictions are shown to two decimal places.
pub fn format_rate(value: f64) -> String {
    format!("{:.2}", value)
}

/// Model-quality metrics are shown to six decimal places.
pub fn format_metric(value: f64) -> String {
    format!("{:.6}", value)
}
