// src/state/query_state.rs
use tokio::runtime::Handle;

use crate::analysis::{AnalysisSimulator, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTab {
    Performance,
    ExecutionPlans,
    History,
    Optimizations,
}

#[derive(Debug)]
pub struct QueryState {
    pub input: String,
    pub simulator: AnalysisSimulator,
    pub tab: QueryTab,
}

impl QueryState {
    pub fn new(runtime: Handle, notify: Notifier) -> Self {
        Self {
            input: String::new(),
            simulator: AnalysisSimulator::new(runtime, notify),
            tab: QueryTab::Performance,
        }
    }

    /// Whether the Analyze button should be enabled.
    pub fn can_analyze(&self) -> bool {
        self.simulator.can_submit(&self.input)
    }

    pub fn analyze(&mut self) -> bool {
        self.simulator.submit(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn analyze_button_tracks_input_and_phase() {
        let mut state = QueryState::new(Handle::current(), Arc::new(|| {}));
        assert!(!state.can_analyze());

        state.input = "  ".to_string();
        assert!(!state.can_analyze());

        state.input = "SELECT 1".to_string();
        assert!(state.can_analyze());
        assert!(state.analyze());
        assert!(!state.can_analyze());
        assert!(!state.analyze());
    }
}
