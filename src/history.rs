//! Bounded history buffers backing the usage charts.

use std::collections::VecDeque;

/// Points kept per chart; the oldest entry is evicted beyond this.
pub const CHART_CAPACITY: usize = 20;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() == cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

/// Fixed-capacity FIFO of (time label, value) samples for one metric.
pub struct SeriesBuffer {
    points: VecDeque<(String, f64)>,
    cap: usize,
}

impl SeriesBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        push_capped(&mut self.points, (label.into(), value), self.cap);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.back().map(|(_, v)| *v)
    }

    pub fn first_label(&self) -> Option<&str> {
        self.points.front().map(|(l, _)| l.as_str())
    }

    pub fn last_label(&self) -> Option<&str> {
        self.points.back().map(|(l, _)| l.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    /// (x, y) pairs for the chart widget, x being the sample index.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, (_, v))| (i as f64, *v))
            .collect()
    }
}

/// The three chart buffers, owned by the app for the session lifetime.
pub struct ChartSet {
    pub cpu: SeriesBuffer,
    pub memory: SeriesBuffer,
    pub disk: SeriesBuffer,
}

impl ChartSet {
    pub fn new() -> Self {
        Self {
            cpu: SeriesBuffer::new(CHART_CAPACITY),
            memory: SeriesBuffer::new(CHART_CAPACITY),
            disk: SeriesBuffer::new(CHART_CAPACITY),
        }
    }
}

impl Default for ChartSet {
    fn default() -> Self {
        Self::new()
    }
}
