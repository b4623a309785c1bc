//! HTTP transport for the prediction service.
//!
//! One POST per submission, JSON body, no retries and no client-side
//! timeout override; the transport's defaults apply.

use crate::domain::errors::SubmitError;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::{PredictionResult, RequestPayload};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

pub struct HttpPredictionService {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionService {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, SubmitError> {
        debug!("POST {} date={}", self.endpoint, payload.date);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction request did not complete: {}", e);
                SubmitError::Network {
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction service returned {}", status);
            return Err(SubmitError::Server {
                status: status.as_u16(),
            });
        }

        // An undecodable 2xx body counts as a transport failure, not a
        // server one.
        response.json::<PredictionResult>().await.map_err(|e| {
            warn!("Failed to decode prediction response: {}", e);
            SubmitError::Network {
                detail: e.to_string(),
            }
        })
    }
}
