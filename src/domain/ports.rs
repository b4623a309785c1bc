use crate::domain::errors::SubmitError;
use crate::domain::prediction::{PredictionResult, RequestPayload};
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Submit one payload and return the decoded prediction, or the
    /// user-facing failure for this cycle. Exactly one request per call;
    /// no retries.
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, SubmitError>;
}
