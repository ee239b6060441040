// src/state/load_test_state.rs
use std::ops::RangeInclusive;

use tracing::info;

use crate::fixtures::load_test::BASELINE_RPS;

pub const TRAFFIC_RANGE: RangeInclusive<f64> = 1.0..=5.0;
pub const TRAFFIC_STEP: f64 = 0.5;
pub const DURATION_RANGE: RangeInclusive<f64> = 60.0..=600.0;
pub const DURATION_STEP: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTestTab {
    Latency,
    Throughput,
    Resources,
    Errors,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTestState {
    pub traffic_multiplier: f64,
    pub duration_secs: f64,
    pub tab: LoadTestTab,
}

impl Default for LoadTestState {
    fn default() -> Self {
        Self {
            traffic_multiplier: 2.0,
            duration_secs: 180.0,
            tab: LoadTestTab::Latency,
        }
    }
}

impl LoadTestState {
    /// Requests per second the configured test would generate.
    pub fn test_load_rps(&self) -> f64 {
        BASELINE_RPS * self.traffic_multiplier
    }

    /// "Run Test" has no load generator behind it; the request is only logged.
    pub fn request_run(&self) {
        info!(
            traffic_multiplier = self.traffic_multiplier,
            duration_secs = self.duration_secs,
            target_rps = self.test_load_rps(),
            "Load test requested (no load generator attached)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format_thousands;

    #[test]
    fn defaults_match_recommended_profile() {
        let state = LoadTestState::default();
        assert_eq!(state.traffic_multiplier, 2.0);
        assert_eq!(state.duration_secs, 180.0);
        assert!(TRAFFIC_RANGE.contains(&state.traffic_multiplier));
        assert!(DURATION_RANGE.contains(&state.duration_secs));
    }

    #[test]
    fn test_load_scales_baseline() {
        let mut state = LoadTestState::default();
        assert_eq!(format_thousands(state.test_load_rps()), "6,400");

        state.traffic_multiplier = 3.5;
        assert_eq!(format_thousands(state.test_load_rps()), "11,200");

        state.traffic_multiplier = 1.0;
        assert_eq!(format_thousands(state.test_load_rps()), "3,200");
    }
}
