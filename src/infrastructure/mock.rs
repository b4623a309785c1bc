use crate::domain::errors::SubmitError;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::{PredictionResult, RequestPayload};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted prediction service. Returns a fixed outcome, records every
/// payload it receives, and counts calls so tests can assert that
/// validation failures never reach the network.
pub struct MockPredictionService {
    outcome: Result<PredictionResult, SubmitError>,
    calls: AtomicUsize,
    received: Mutex<Vec<RequestPayload>>,
}

impl MockPredictionService {
    pub fn succeeding(result: PredictionResult) -> Self {
        Self::with_outcome(Ok(result))
    }

    pub fn failing(err: SubmitError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<PredictionResult, SubmitError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<RequestPayload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}
