//! Editable input state for the prediction form.
//!
//! Values stay as free text while the user edits; nothing is validated
//! until a submission is opened, at which point every feature must parse
//! to a finite number and the date must be a well-formed `YYYY-MM-DD`.

use crate::domain::errors::SubmitError;
use crate::domain::prediction::RequestPayload;
use chrono::NaiveDate;
use tracing::debug;

/// Input feature keys, in the exact order the prediction service expects
/// the `features` array.
pub const FEATURE_KEYS: [&str; 6] = [
    "Fixed_Rate_2y_95",
    "Fixed_Rate_2y_75",
    "Tracker",
    "Variable",
    "LIBOR",
    "Gov_Bond",
];

/// Human-readable label for a feature key ("Fixed_Rate_2y_95" -> "Fixed Rate 2y 95").
pub fn field_label(key: &str) -> String {
    key.replace('_', " ")
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: [String; 6],
    date: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored text for one feature key. Unknown keys are ignored.
    pub fn set_field(&mut self, key: &str, raw: &str) {
        match FEATURE_KEYS.iter().position(|k| *k == key) {
            Some(idx) => self.values[idx] = raw.to_string(),
            None => debug!("Ignoring unknown form field '{}'", key),
        }
    }

    /// Store the date text verbatim.
    pub fn set_date(&mut self, raw: &str) {
        self.date = raw.to_string();
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        FEATURE_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Mutable bindings for the input widgets, paired with their keys.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut String)> {
        FEATURE_KEYS.iter().copied().zip(self.values.iter_mut())
    }

    pub fn date_mut(&mut self) -> &mut String {
        &mut self.date
    }

    /// Parse every feature value in fixed key order.
    pub fn parse_features(&self) -> Result<[f64; 6], SubmitError> {
        let mut parsed = [0.0_f64; 6];
        for (idx, key) in FEATURE_KEYS.iter().enumerate() {
            match self.values[idx].trim().parse::<f64>() {
                Ok(value) if value.is_finite() => parsed[idx] = value,
                _ => return Err(SubmitError::InvalidFeature { field: key }),
            }
        }
        Ok(parsed)
    }

    /// Reject an empty or malformed date. The form widget is expected to
    /// enforce this too, but headless callers reach the controller directly.
    pub fn parse_date(&self) -> Result<String, SubmitError> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| SubmitError::InvalidDate)?;
        Ok(raw.to_string())
    }

    /// Validate the whole form and build the request body.
    pub fn to_payload(&self) -> Result<RequestPayload, SubmitError> {
        Ok(RequestPayload {
            features: self.parse_features()?,
            date: self.parse_date()?,
        })
    }
}
