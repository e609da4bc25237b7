//! Metrics module - per-step timing statistics

use hdrhistogram::Histogram;
use std::time::Duration;

pub struct LoopMetrics {
    step_hist: Histogram<u64>,
    total_steps: u64,
}

impl LoopMetrics {
    pub fn new() -> Self {
        Self {
            step_hist: Histogram::new(3).unwrap(),
            total_steps: 0,
        }
    }

    pub fn record_step(&mut self, duration: Duration) {
        self.step_hist.record(duration.as_nanos() as u64).ok();
        self.total_steps += 1;
    }

    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            step_p50: Duration::from_nanos(self.step_hist.value_at_quantile(0.5)),
            step_p99: Duration::from_nanos(self.step_hist.value_at_quantile(0.99)),
            step_max: Duration::from_nanos(self.step_hist.max()),
            total_steps: self.total_steps,
        }
    }
}

impl Default for LoopMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct MetricsReport {
    pub step_p50: Duration,
    pub step_p99: Duration,
    pub step_max: Duration,
    pub total_steps: u64,
}
