//! Types that mirror the dashboard API's JSON schema.
//!
//! Every section of the health snapshot is optional: the agent log the
//! backend tails may omit whole subtrees, and a partial snapshot must still
//! update the sections it does carry.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Wrapper returned by `GET /health`.
#[derive(Debug, Deserialize, Clone)]
pub struct HealthEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<HealthSnapshot>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HealthSnapshot {
    pub cpu: Option<CpuStats>,
    pub memory: Option<MemoryStats>,
    pub disk: Option<DiskStats>,
    pub system: Option<SystemStats>,
    pub hostname: Option<String>,
    // service name -> raw status string ("active", "inactive", ...)
    pub services: Option<BTreeMap<String, String>>,
    pub processes: Option<ProcessSample>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CpuStats {
    pub usage_percent: Option<f64>,
    pub load_avg: Option<LoadAvg>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoadAvg {
    #[serde(rename = "1m")]
    pub one: f64,
    #[serde(rename = "5m")]
    pub five: f64,
    #[serde(rename = "15m")]
    pub fifteen: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MemoryStats {
    pub used_percent: Option<f64>,
    pub used_mb: Option<f64>,
    pub total_mb: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiskStats {
    pub used_percent: Option<f64>,
    pub used_gb: Option<f64>,
    pub total_gb: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SystemStats {
    pub uptime_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcessSample {
    pub top_cpu: Option<Vec<ProcessInfo>>,
    pub top_memory: Option<Vec<ProcessInfo>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: Option<f64>,
    pub mem_percent: Option<f64>,
}

/// One alert event. All fields are strings: the backend splits a
/// pipe-delimited log line and does no further typing.
#[derive(Debug, Deserialize, Clone)]
pub struct Alert {
    pub alert: String,
    pub state: String,
    pub host: String,
    pub value: String,
    pub threshold: String,
    pub timestamp: String,
}

/// Payload of `GET /alerts`. `count` echoes the backend's query limit and
/// may exceed `alerts.len()`.
#[derive(Debug, Deserialize, Clone)]
pub struct AlertsPayload {
    pub alerts: Vec<Alert>,
    pub count: Option<u64>,
}

/// Payload of `GET /healing`: free-text log lines, newest window.
#[derive(Debug, Deserialize, Clone)]
pub struct HealingPayload {
    pub events: Vec<String>,
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_snapshot_parses_renamed_load_keys() {
        let json = r#"{
            "status": "ok",
            "data": {
                "cpu": {"usage_percent": 12.5, "load_avg": {"1m": 0.42, "5m": 0.31, "15m": 0.25}},
                "memory": {"used_percent": 48.0, "used_mb": 3890, "total_mb": 8192},
                "hostname": "web-01",
                "services": {"nginx": "active", "ufw": "inactive"}
            }
        }"#;
        let env: HealthEnvelope = serde_json::from_str(json).expect("parse envelope");
        let snap = env.data.expect("data present");
        let cpu = snap.cpu.expect("cpu present");
        assert_eq!(cpu.usage_percent, Some(12.5));
        let load = cpu.load_avg.expect("load present");
        assert_eq!(load.one, 0.42);
        assert_eq!(load.fifteen, 0.25);
        assert!(snap.disk.is_none());
        assert_eq!(snap.services.unwrap().get("nginx").map(String::as_str), Some("active"));
    }

    #[test]
    fn empty_data_object_is_an_empty_snapshot() {
        let env: HealthEnvelope =
            serde_json::from_str(r#"{"status": "no-data", "data": {}}"#).expect("parse");
        let snap = env.data.expect("empty object still deserializes");
        assert!(snap.cpu.is_none() && snap.hostname.is_none() && snap.processes.is_none());
    }

    #[test]
    fn alerts_payload_requires_alerts_field() {
        assert!(serde_json::from_str::<AlertsPayload>(r#"{"count": 5}"#).is_err());
        let p: AlertsPayload =
            serde_json::from_str(r#"{"alerts": [], "count": 20}"#).expect("parse");
        assert_eq!(p.count, Some(20));
        assert!(p.alerts.is_empty());
    }
}
