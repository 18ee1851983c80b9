//! Last-known dashboard state, merged section by section from each poll.
//!
//! A failed fetch never clears anything: widgets keep showing the previous
//! values. A successful health poll only overwrites the sections it carries,
//! so a snapshot missing `cpu` still updates `memory` and `disk`.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::types::{
    AlertsPayload, CpuStats, DiskStats, HealingPayload, HealthSnapshot, MemoryStats, ProcessInfo,
};

#[derive(Default)]
pub struct DashboardState {
    pub cpu: Option<CpuStats>,
    pub memory: Option<MemoryStats>,
    pub disk: Option<DiskStats>,
    pub uptime_seconds: Option<u64>,
    pub hostname: Option<String>,
    // Retained per key; a poll listing only some services leaves the rest.
    pub services: BTreeMap<String, String>,
    pub top_cpu: Vec<ProcessInfo>,
    pub top_memory: Vec<ProcessInfo>,
    pub alerts: Option<AlertsPayload>,
    pub healing: Option<HealingPayload>,
    /// When the last refresh cycle settled, successful or not.
    pub last_refresh: Option<DateTime<Local>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one health snapshot: present sections overwrite, absent
    /// sections are untouched.
    pub fn apply_health(&mut self, snap: HealthSnapshot) {
        if let Some(cpu) = snap.cpu {
            self.cpu = Some(cpu);
        }
        if let Some(memory) = snap.memory {
            self.memory = Some(memory);
        }
        if let Some(disk) = snap.disk {
            self.disk = Some(disk);
        }
        if let Some(system) = snap.system {
            if let Some(uptime) = system.uptime_seconds {
                self.uptime_seconds = Some(uptime);
            }
        }
        if let Some(hostname) = snap.hostname {
            self.hostname = Some(hostname);
        }
        if let Some(services) = snap.services {
            for (name, status) in services {
                self.services.insert(name, status);
            }
        }
        if let Some(processes) = snap.processes {
            if let Some(top_cpu) = processes.top_cpu {
                self.top_cpu = top_cpu;
            }
            if let Some(top_memory) = processes.top_memory {
                self.top_memory = top_memory;
            }
        }
    }

    /// Alert and healing lists are replaced wholesale on every successful
    /// poll; the backend owns ordering and windowing.
    pub fn apply_alerts(&mut self, payload: AlertsPayload) {
        self.alerts = Some(payload);
    }

    pub fn apply_healing(&mut self, payload: HealingPayload) {
        self.healing = Some(payload);
    }
}
