//! App state and main loop: input handling, refresh scheduling, applying
//! updates from in-flight cycles, and drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::sleep;

use crate::api::ApiClient;
use crate::history::ChartSet;
use crate::refresh::{spawn_refresh, Update};
use crate::state::DashboardState;
use crate::types::HealthSnapshot;
use crate::ui::util::chart_label;
use crate::ui::{
    alerts::draw_alerts, charts::draw_charts, header::draw_header, healing::draw_healing,
    metrics::draw_metrics, processes::draw_process_lists, services::draw_services,
};

pub struct App {
    // Retained widget state + the three rolling chart buffers. Only this
    // task mutates them; refresh cycles report over the channel.
    pub state: DashboardState,
    pub charts: ChartSet,

    should_quit: bool,

    last_cycle_started: Instant,
    cycle_interval: Duration,
}

impl App {
    pub fn new(cycle_interval: Duration) -> Self {
        Self {
            state: DashboardState::new(),
            charts: ChartSet::new(),
            should_quit: false,
            // Backdate so the first loop iteration fires a cycle immediately
            last_cycle_started: Instant::now()
                .checked_sub(cycle_interval)
                .unwrap_or_else(Instant::now),
            cycle_interval,
        }
    }

    pub async fn run(&mut self, base_url: &str) -> Result<()> {
        let api = ApiClient::new(base_url);
        let (tx, mut rx) = unbounded_channel();

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal, &api, &tx, &mut rx).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableFocusChange, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        api: &ApiClient,
        tx: &UnboundedSender<Update>,
        rx: &mut UnboundedReceiver<Update>,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                match event::read()? {
                    Event::Key(k) => match k.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.should_quit = true;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            // Manual out-of-band cycle
                            spawn_refresh(api, tx);
                        }
                        _ => {}
                    },
                    // Terminal regained focus: refresh right away, like a
                    // tab coming back to the foreground.
                    Event::FocusGained => spawn_refresh(api, tx),
                    // Losing focus changes nothing; the cadence keeps going.
                    Event::FocusLost => {}
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            if self.should_quit {
                break;
            }

            // Fire a cycle when due. In-flight cycles are never cancelled;
            // overlapping cycles interleave on the channel, last write wins.
            if self.last_cycle_started.elapsed() >= self.cycle_interval {
                spawn_refresh(api, tx);
                self.last_cycle_started = Instant::now();
            }

            // Apply whatever the cycles delivered since the last frame.
            while let Ok(update) = rx.try_recv() {
                self.apply(update);
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            // Tick rate
            sleep(Duration::from_millis(100)).await;
        }

        Ok(())
    }

    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Health(snapshot) => {
                self.record_chart_samples(&snapshot);
                self.state.apply_health(snapshot);
            }
            Update::Alerts(payload) => self.state.apply_alerts(payload),
            Update::Healing(payload) => self.state.apply_healing(payload),
            Update::CycleDone { finished_at } => self.state.last_refresh = Some(finished_at),
        }
    }

    // Samples come from the incoming snapshot, not the merged state: a
    // snapshot without a metric skips that chart for this cycle, even
    // though the gauge keeps its retained value. A present 0 is recorded.
    fn record_chart_samples(&mut self, snapshot: &HealthSnapshot) {
        let label = chart_label(&Local::now());
        if let Some(v) = snapshot.cpu.as_ref().and_then(|c| c.usage_percent) {
            self.charts.cpu.push(label.clone(), v);
        }
        if let Some(v) = snapshot.memory.as_ref().and_then(|m| m.used_percent) {
            self.charts.memory.push(label.clone(), v);
        }
        if let Some(v) = snapshot.disk.as_ref().and_then(|d| d.used_percent) {
            self.charts.disk.push(label, v);
        }
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, gauges, services, charts, bottom panels
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),   // header
                Constraint::Length(3),   // metric gauges + uptime
                Constraint::Length(3),   // service badges
                Constraint::Ratio(1, 3), // usage charts
                Constraint::Min(10),     // processes + alerts + healing
            ])
            .split(area);

        draw_header(f, rows[0], &self.state);
        draw_metrics(f, rows[1], &self.state);
        draw_services(f, rows[2], &self.state);
        draw_charts(f, rows[3], &self.charts);

        // Bottom: process lists on the left, alert table and healing log
        // stacked on the right.
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(rows[4]);
        draw_process_lists(f, bottom[0], &self.state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(bottom[1]);
        draw_alerts(f, right[0], &self.state);
        draw_healing(f, right[1], &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::CHART_CAPACITY;
    use crate::types::{AlertsPayload, CpuStats};

    fn health_update(pct: f64) -> Update {
        Update::Health(HealthSnapshot {
            cpu: Some(CpuStats {
                usage_percent: Some(pct),
                load_avg: None,
            }),
            ..HealthSnapshot::default()
        })
    }

    #[test]
    fn interleaved_cycles_keep_buffers_bounded() {
        let mut app = App::new(Duration::from_secs(5));

        // Two cycles racing: health and alert updates interleave and both
        // CycleDone stamps land, in whatever order the network resolved.
        for i in 0..15 {
            app.apply(health_update(i as f64));
            app.apply(Update::Alerts(AlertsPayload {
                alerts: vec![],
                count: Some(0),
            }));
            app.apply(health_update((i + 50) as f64));
            app.apply(Update::CycleDone {
                finished_at: Local::now(),
            });
        }

        assert!(app.charts.cpu.len() <= CHART_CAPACITY);
        assert_eq!(app.charts.cpu.len(), CHART_CAPACITY);
        assert!(app.state.last_refresh.is_some());
        // Last write wins: the retained gauge shows the newest applied value.
        assert_eq!(app.state.cpu.as_ref().unwrap().usage_percent, Some(64.0));
    }

    #[test]
    fn cycle_done_advances_stamp_without_data() {
        let mut app = App::new(Duration::from_secs(5));
        app.apply(Update::CycleDone {
            finished_at: Local::now(),
        });
        assert!(app.state.last_refresh.is_some());
        assert!(app.state.cpu.is_none());
        assert!(app.charts.cpu.is_empty());
    }

    #[test]
    fn snapshot_without_metric_skips_only_that_chart() {
        let mut app = App::new(Duration::from_secs(5));
        app.apply(Update::Health(HealthSnapshot {
            cpu: Some(CpuStats {
                usage_percent: Some(10.0),
                load_avg: None,
            }),
            memory: None,
            ..HealthSnapshot::default()
        }));
        assert_eq!(app.charts.cpu.len(), 1);
        assert!(app.charts.memory.is_empty());
        assert!(app.charts.disk.is_empty());
    }
}
