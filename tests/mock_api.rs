//! Integration tests against a mock dashboard API served by axum.

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use opstop::api::ApiClient;
use opstop::app::App;
use opstop::history::CHART_CAPACITY;
use opstop::refresh::{spawn_refresh, Update};

/// Serve `router` on an ephemeral port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock api");
    });
    format!("http://{addr}")
}

fn health_json() -> serde_json::Value {
    json!({
        "status": "ok",
        "data": {
            "cpu": {"usage_percent": 37.5, "load_avg": {"1m": 0.5, "5m": 0.4, "15m": 0.3}},
            "memory": {"used_percent": 52.0, "used_mb": 4260.0, "total_mb": 8192.0},
            "disk": {"used_percent": 71.2, "used_gb": 35.6, "total_gb": 50.0},
            "system": {"uptime_seconds": 90061},
            "hostname": "mock-01",
            "services": {"ssh": "active", "nginx": "inactive"},
            "processes": {
                "top_cpu": [
                    {"pid": 101, "name": "postgres", "cpu_percent": 12.0},
                    {"pid": 102, "name": "nginx", "cpu_percent": 3.0}
                ],
                "top_memory": [
                    {"pid": 101, "name": "postgres", "mem_percent": 22.0}
                ]
            }
        }
    })
}

#[tokio::test]
async fn fetches_unwrap_payloads() {
    let router = Router::new()
        .route("/health", get(|| async { Json(health_json()) }))
        .route(
            "/alerts",
            get(|| async {
                Json(json!({
                    "count": 20,
                    "alerts": [{
                        "alert": "cpu_usage",
                        "state": "RECOVERED",
                        "host": "mock-01",
                        "value": "12",
                        "threshold": "90",
                        "timestamp": "2026-08-08 09:00:00"
                    }]
                }))
            }),
        )
        .route(
            "/healing",
            get(|| async {
                Json(json!({"count": 2, "events": [
                    "Nginx restart successful",
                    "Disk cleanup failed: ERROR no space"
                ]}))
            }),
        );
    let api = ApiClient::new(&serve(router).await);

    let snap = api.fetch_health().await.expect("health payload");
    assert_eq!(snap.hostname.as_deref(), Some("mock-01"));
    assert_eq!(snap.cpu.unwrap().usage_percent, Some(37.5));

    let alerts = api.fetch_alerts().await.expect("alerts payload");
    assert_eq!(alerts.count, Some(20));
    assert_eq!(alerts.alerts.len(), 1);
    assert_eq!(alerts.alerts[0].state, "RECOVERED");

    let healing = api.fetch_healing().await.expect("healing payload");
    assert_eq!(healing.events.len(), 2);
}

#[tokio::test]
async fn failures_collapse_to_none() {
    // 500 on health, wrong shape on alerts, no healing route at all.
    let router = Router::new()
        .route("/health", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/alerts", get(|| async { Json(json!({"count": 5})) }));
    let api = ApiClient::new(&serve(router).await);

    assert!(api.fetch_health().await.is_none());
    assert!(api.fetch_alerts().await.is_none());
    assert!(api.fetch_healing().await.is_none());
}

#[tokio::test]
async fn health_without_data_is_a_miss() {
    let router = Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "no-data"})) }),
    );
    let api = ApiClient::new(&serve(router).await);
    assert!(api.fetch_health().await.is_none());
}

async fn recv_until_cycles(
    rx: &mut UnboundedReceiver<Update>,
    cycles: usize,
) -> Vec<Update> {
    let mut updates = Vec::new();
    let mut done = 0;
    while done < cycles {
        let update = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for cycle updates")
            .expect("update channel closed");
        if matches!(update, Update::CycleDone { .. }) {
            done += 1;
        }
        updates.push(update);
    }
    updates
}

#[tokio::test]
async fn overlapping_cycles_settle_without_corruption() {
    // Health is slow, so a second cycle starts (and its alerts/healing land)
    // while the first cycle's health fetch is still in flight.
    let router = Router::new()
        .route(
            "/health",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(health_json())
            }),
        )
        .route(
            "/alerts",
            get(|| async { Json(json!({"count": 0, "alerts": []})) }),
        )
        .route(
            "/healing",
            get(|| async { Json(json!({"count": 0, "events": []})) }),
        );
    let api = ApiClient::new(&serve(router).await);
    let (tx, mut rx) = unbounded_channel();

    spawn_refresh(&api, &tx);
    tokio::time::sleep(Duration::from_millis(50)).await;
    spawn_refresh(&api, &tx);

    let updates = recv_until_cycles(&mut rx, 2).await;
    let healths = updates
        .iter()
        .filter(|u| matches!(u, Update::Health(_)))
        .count();
    assert_eq!(healths, 2, "both cycles should deliver health");

    // Applying the interleaved stream must leave valid, bounded state.
    let mut app = App::new(Duration::from_secs(5));
    for update in updates {
        app.apply(update);
    }
    assert_eq!(app.charts.cpu.len(), 2);
    assert!(app.charts.cpu.len() <= CHART_CAPACITY);
    assert!(app.state.last_refresh.is_some());
    assert_eq!(app.state.hostname.as_deref(), Some("mock-01"));
}

#[tokio::test]
async fn cycle_done_arrives_even_when_every_flow_fails() {
    // Nothing routed: all three fetches fail, the stamp still advances.
    let api = ApiClient::new(&serve(Router::new()).await);
    let (tx, mut rx) = unbounded_channel();

    spawn_refresh(&api, &tx);
    let updates = recv_until_cycles(&mut rx, 1).await;
    assert_eq!(updates.len(), 1, "only CycleDone expected");
    assert!(matches!(updates[0], Update::CycleDone { .. }));
}
