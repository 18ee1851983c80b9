//! HTTP client for the dashboard API.
//!
//! Fetch helpers never let an error escape: any transport failure, non-2xx
//! status, or undecodable body is logged and collapses to `None`, and the
//! caller keeps whatever it rendered last.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::types::{AlertsPayload, HealingPayload, HealthEnvelope, HealthSnapshot};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// `base` is the API root, e.g. `http://127.0.0.1:8000/api`.
    pub fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let resp = self.http.get(format!("{}{}", self.base, path)).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        Ok(resp.json::<T>().await?)
    }

    /// Latest monitoring snapshot, unwrapped from its envelope. A reachable
    /// backend with no agent data yet reports `data: null`; that counts as a
    /// failed fetch too.
    pub async fn fetch_health(&self) -> Option<HealthSnapshot> {
        match self.get_json::<HealthEnvelope>("/health").await {
            Ok(envelope) => match envelope.data {
                Some(snapshot) => Some(snapshot),
                None => {
                    warn!(
                        status = envelope.status.as_deref().unwrap_or("unknown"),
                        "health payload carried no data"
                    );
                    None
                }
            },
            Err(err) => {
                warn!(error = %err, "health fetch failed");
                None
            }
        }
    }

    pub async fn fetch_alerts(&self) -> Option<AlertsPayload> {
        match self.get_json::<AlertsPayload>("/alerts").await {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(error = %err, "alerts fetch failed");
                None
            }
        }
    }

    pub async fn fetch_healing(&self) -> Option<HealingPayload> {
        match self.get_json::<HealingPayload>("/healing").await {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(error = %err, "healing fetch failed");
                None
            }
        }
    }
}
