//! Submission state machine flows against a scripted service: one request
//! per valid submission, validation short-circuits, and every path lands in
//! a renderable terminal state.

use ratecast::application::controller::PredictionController;
use ratecast::domain::errors::SubmitError;
use ratecast::domain::form::FEATURE_KEYS;
use ratecast::domain::prediction::{PredictionResult, TreeMetrics, format_metric, format_rate};
use ratecast::infrastructure::mock::MockPredictionService;

fn example_result() -> PredictionResult {
    PredictionResult {
        tree_prediction: 4.31,
        prophet_prediction: 4.28,
        combined_rate: 4.30,
        tree_metrics: TreeMetrics {
            mse: 0.012345,
            mae: 0.023456,
            r2: 0.912345,
        },
    }
}

fn filled_controller() -> PredictionController {
    let mut controller = PredictionController::new();
    for (key, raw) in FEATURE_KEYS.into_iter().zip(["4.5", "4.2", "3.9", "4.0", "5.1", "3.5"]) {
        controller.update_field(key, raw);
    }
    controller.update_date("2024-06-01");
    controller
}

#[tokio::test]
async fn submits_exactly_one_payload_in_fixed_key_order() {
    let service = MockPredictionService::succeeding(example_result());
    let mut controller = filled_controller();

    controller.submit(&service).await;

    assert_eq!(service.calls(), 1);
    let sent = service.received();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].features, [4.5, 4.2, 3.9, 4.0, 5.1, 3.5]);
    assert_eq!(sent[0].date, "2024-06-01");

    // Exact wire shape of the body
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap(),
        serde_json::json!({
            "features": [4.5, 4.2, 3.9, 4.0, 5.1, 3.5],
            "date": "2024-06-01",
        })
    );
}

#[tokio::test]
async fn non_numeric_feature_never_reaches_the_service() {
    for bad in ["", "abc"] {
        let service = MockPredictionService::succeeding(example_result());
        let mut controller = filled_controller();
        controller.update_field("Gov_Bond", bad);

        controller.submit(&service).await;

        assert_eq!(service.calls(), 0, "value {:?} must not trigger a request", bad);
        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Please enter valid numbers for all fields.")
        );
        assert!(state.prediction.is_none());
    }
}

#[tokio::test]
async fn empty_date_never_reaches_the_service() {
    let service = MockPredictionService::succeeding(example_result());
    let mut controller = filled_controller();
    controller.update_date("");

    controller.submit(&service).await;

    assert_eq!(service.calls(), 0);
    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Please select a valid date before submitting.")
    );
}

#[tokio::test]
async fn success_stores_result_exactly() {
    let service = MockPredictionService::succeeding(example_result());
    let mut controller = filled_controller();

    controller.submit(&service).await;

    let state = controller.state();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.prediction.as_ref(), Some(&example_result()));
}

#[tokio::test]
async fn server_error_sets_retry_message() {
    let service = MockPredictionService::failing(SubmitError::Server { status: 500 });
    let mut controller = filled_controller();

    controller.submit(&service).await;

    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Error fetching predictions. Please try again.")
    );
    assert!(state.prediction.is_none());
}

#[tokio::test]
async fn network_error_sets_connectivity_message() {
    let service = MockPredictionService::failing(SubmitError::Network {
        detail: "connection refused".to_string(),
    });
    let mut controller = filled_controller();

    controller.submit(&service).await;

    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Network error. Please check your connection.")
    );
    assert!(state.prediction.is_none());
}

#[tokio::test]
async fn failure_then_resubmit_recovers() {
    let failing = MockPredictionService::failing(SubmitError::Server { status: 502 });
    let mut controller = filled_controller();
    controller.submit(&failing).await;
    assert!(controller.state().error.is_some());

    // Same controller, user retries against a healthy service
    let healthy = MockPredictionService::succeeding(example_result());
    controller.submit(&healthy).await;

    let state = controller.state();
    assert!(state.error.is_none());
    assert_eq!(state.prediction.as_ref(), Some(&example_result()));
}

#[tokio::test]
async fn example_response_renders_at_documented_precision() {
    let service = MockPredictionService::succeeding(example_result());
    let mut controller = filled_controller();

    controller.submit(&service).await;

    let result = controller.state().prediction.clone().unwrap();
    assert_eq!(format_rate(result.tree_prediction), "4.31");
    assert_eq!(format_rate(result.prophet_prediction), "4.28");
    assert_eq!(format_rate(result.combined_rate), "4.30");
    assert_eq!(format_metric(result.tree_metrics.mse), "0.012345");
    assert_eq!(format_metric(result.tree_metrics.mae), "0.023456");
    assert_eq!(format_metric(result.tree_metrics.r2), "0.912345");
}
