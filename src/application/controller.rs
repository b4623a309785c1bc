//! The prediction form controller: owns the editable form, reduces
//! submission outcomes into renderable state, and drives the single
//! request/response cycle against a [`PredictionService`].
//!
//! State transitions are pure (`UiState::apply`) so the submission state
//! machine is testable without any rendering surface.

use crate::domain::errors::SubmitError;
use crate::domain::form::FormState;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::{PredictionResult, RequestPayload};
use tracing::{info, warn};

/// Transitions of a submission cycle. `Started` opens the cycle;
/// `Completed` and `Failed` are the terminal events, and every path through
/// a submission ends in exactly one of them.
#[derive(Debug, Clone)]
pub enum SubmitEvent {
    Started,
    Completed(PredictionResult),
    Failed(SubmitError),
}

/// Renderable state. After a completed cycle exactly one of `error` and
/// `prediction` is populated; both are cleared when a new cycle starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
    pub prediction: Option<PredictionResult>,
}

impl UiState {
    /// Pure transition: consumes the current state, returns the next one.
    pub fn apply(self, event: SubmitEvent) -> UiState {
        match event {
            SubmitEvent::Started => UiState {
                loading: true,
                error: None,
                prediction: None,
            },
            SubmitEvent::Completed(result) => UiState {
                loading: false,
                error: None,
                prediction: Some(result),
            },
            SubmitEvent::Failed(err) => UiState {
                loading: false,
                error: Some(err.to_string()),
                prediction: None,
            },
        }
    }
}

/// Run the network half of a submission cycle and fold the outcome into
/// the terminal event. Shared by the async UI worker and [`submit`].
///
/// [`submit`]: PredictionController::submit
pub async fn run_submission(
    service: &dyn PredictionService,
    payload: RequestPayload,
) -> SubmitEvent {
    match service.predict(&payload).await {
        Ok(result) => SubmitEvent::Completed(result),
        Err(err) => {
            warn!("Prediction request failed: {:?}", err);
            SubmitEvent::Failed(err)
        }
    }
}

#[derive(Debug, Default)]
pub struct PredictionController {
    pub form: FormState,
    state: UiState,
}

impl PredictionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Replace the stored text for one feature field. Never validates.
    pub fn update_field(&mut self, key: &str, raw: &str) {
        self.form.set_field(key, raw);
    }

    /// Store the date text verbatim. Never validates.
    pub fn update_date(&mut self, raw: &str) {
        self.form.set_date(raw);
    }

    pub fn apply(&mut self, event: SubmitEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Validate the form and open a submission cycle.
    ///
    /// Returns the payload to send, or `None` when the cycle terminated
    /// locally: either a submission is already in flight (the cycle is not
    /// reopened) or validation failed (the failure event has been applied,
    /// no request must be issued).
    pub fn begin_submit(&mut self) -> Option<RequestPayload> {
        if self.state.loading {
            info!("Submission already in flight, ignoring");
            return None;
        }

        self.apply(SubmitEvent::Started);

        match self.form.to_payload() {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!("Rejected submission: {:?}", err);
                self.apply(SubmitEvent::Failed(err));
                None
            }
        }
    }

    /// Full submission cycle: validate, issue one request, reduce the
    /// outcome. Used by headless callers; the UI splits the cycle across
    /// frames with [`begin_submit`](Self::begin_submit) and
    /// [`apply`](Self::apply).
    pub async fn submit(&mut self, service: &dyn PredictionService) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let event = run_submission(service, payload).await;
        self.apply(event);
    }
}
