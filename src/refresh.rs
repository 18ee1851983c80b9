//! Refresh orchestration.
//!
//! One cycle fetches the three endpoints concurrently and reports back to
//! the UI task over a channel. Flows are independent: each sends its payload
//! as soon as its own fetch lands, and one flow failing (or hanging) never
//! blocks the others' updates. `CycleDone` is sent once all three settle,
//! whether or not any of them produced data, so the "last refreshed" stamp
//! records the attempt. Cycles may overlap; the UI task applies updates in
//! arrival order, last write wins.

use chrono::{DateTime, Local};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::api::ApiClient;
use crate::types::{AlertsPayload, HealingPayload, HealthSnapshot};

pub enum Update {
    Health(HealthSnapshot),
    Alerts(AlertsPayload),
    Healing(HealingPayload),
    CycleDone { finished_at: DateTime<Local> },
}

/// Launch one refresh cycle in the background and return immediately.
pub fn spawn_refresh(api: &ApiClient, tx: &UnboundedSender<Update>) {
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let health = {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                match api.fetch_health().await {
                    Some(snapshot) => tx.send(Update::Health(snapshot)).is_ok(),
                    None => false,
                }
            })
        };
        let alerts = {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                match api.fetch_alerts().await {
                    Some(payload) => tx.send(Update::Alerts(payload)).is_ok(),
                    None => false,
                }
            })
        };
        let healing = {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                match api.fetch_healing().await {
                    Some(payload) => tx.send(Update::Healing(payload)).is_ok(),
                    None => false,
                }
            })
        };

        // Join all three; a panicked flow counts as a miss, not a cancel.
        let (health, alerts, healing) = tokio::join!(health, alerts, healing);
        let [health, alerts, healing] = [health, alerts, healing].map(|r| r.unwrap_or(false));
        debug!(health, alerts, healing, "refresh cycle settled");

        let _ = tx.send(Update::CycleDone {
            finished_at: Local::now(),
        });
    });
}
