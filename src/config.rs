use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default endpoint of the prediction service, matching its development
/// deployment. Override with `PREDICT_URL`.
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("PREDICT_URL").unwrap_or_else(|_| DEFAULT_PREDICT_URL.to_string());
        let predict_url =
            Url::parse(&raw).with_context(|| format!("Invalid PREDICT_URL: {}", raw))?;

        Ok(Self { predict_url })
    }
}
