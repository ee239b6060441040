// src/state/mod.rs
use serde::{Serialize, Deserialize};
use tokio::runtime::Handle;
use tracing::info;

use crate::analysis::Notifier;

pub mod backup_state;
pub mod load_test_state;
pub mod query_state;

pub use backup_state::{BackupState, BackupTab, RestoreDialogState};
pub use load_test_state::{LoadTestState, LoadTestTab};
pub use query_state::{QueryState, QueryTab};

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Replication,
    Queries,
    Backup,
    LoadTesting,
    Architecture,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Replication,
        Panel::Queries,
        Panel::Backup,
        Panel::LoadTesting,
        Panel::Architecture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Replication => "Replication",
            Panel::Queries => "Query Optimization",
            Panel::Backup => "Backup & Failover",
            Panel::LoadTesting => "Load Testing",
            Panel::Architecture => "Architecture",
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Panel::Replication
    }
}

// Architecture view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchitectureTab {
    Overview,
    Components,
    DataFlow,
    TechStack,
    Deployment,
}

/// View state of whichever panel is mounted. Replacing it drops the old
/// panel's state, which is how "unmount" happens.
#[derive(Debug)]
pub enum PanelState {
    Replication,
    Queries(QueryState),
    Backup(BackupState),
    LoadTesting(LoadTestState),
    Architecture(ArchitectureTab),
}

impl PanelState {
    pub fn mount(panel: Panel, runtime: &Handle, notify: &Notifier) -> Self {
        match panel {
            Panel::Replication => PanelState::Replication,
            Panel::Queries => PanelState::Queries(QueryState::new(runtime.clone(), notify.clone())),
            Panel::Backup => PanelState::Backup(BackupState::default()),
            Panel::LoadTesting => PanelState::LoadTesting(LoadTestState::default()),
            Panel::Architecture => PanelState::Architecture(ArchitectureTab::Overview),
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            PanelState::Replication => Panel::Replication,
            PanelState::Queries(_) => Panel::Queries,
            PanelState::Backup(_) => Panel::Backup,
            PanelState::LoadTesting(_) => Panel::LoadTesting,
            PanelState::Architecture(_) => Panel::Architecture,
        }
    }
}

// Core application state
pub struct AppState {
    runtime: Handle,
    notify: Notifier,
    pub active: PanelState,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(runtime: Handle, notify: Notifier, initial: Panel) -> Self {
        let active = PanelState::mount(initial, &runtime, &notify);
        Self {
            runtime,
            notify,
            active,
            error_message: None,
        }
    }

    pub fn current_panel(&self) -> Panel {
        self.active.panel()
    }

    /// Switches panels. Re-selecting the mounted panel keeps its state.
    pub fn select_panel(&mut self, panel: Panel) -> bool {
        if self.current_panel() == panel {
            return false;
        }

        info!(from = ?self.current_panel(), to = ?panel, "Switching panel");
        self.active = PanelState::mount(panel, &self.runtime, &self.notify);
        true
    }

    /// Releases anything the mounted panel still has in flight.
    pub fn teardown(&mut self) {
        if let PanelState::Queries(query) = &mut self.active {
            query.simulator.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use crate::analysis::simulator::ANALYSIS_DELAY;

    fn app_state(initial: Panel) -> (AppState, Arc<AtomicUsize>) {
        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        let notify: Notifier = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (AppState::new(Handle::current(), notify, initial), wakeups)
    }

    #[tokio::test]
    async fn mounts_initial_panel() {
        let (state, _) = app_state(Panel::Backup);
        assert_eq!(state.current_panel(), Panel::Backup);
        assert!(matches!(state.active, PanelState::Backup(_)));
    }

    #[tokio::test]
    async fn reselecting_panel_keeps_view_state() {
        let (mut state, _) = app_state(Panel::LoadTesting);
        if let PanelState::LoadTesting(load) = &mut state.active {
            load.traffic_multiplier = 4.5;
        }

        assert!(!state.select_panel(Panel::LoadTesting));
        match &state.active {
            PanelState::LoadTesting(load) => assert_eq!(load.traffic_multiplier, 4.5),
            other => panic!("unexpected panel {:?}", other.panel()),
        }
    }

    #[tokio::test]
    async fn switching_away_and_back_resets_view_state() {
        let (mut state, _) = app_state(Panel::Queries);
        if let PanelState::Queries(query) = &mut state.active {
            query.input = "SELECT 1".to_string();
        }

        assert!(state.select_panel(Panel::Replication));
        assert!(state.select_panel(Panel::Queries));
        match &state.active {
            PanelState::Queries(query) => assert!(query.input.is_empty()),
            other => panic!("unexpected panel {:?}", other.panel()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_query_panel_cancels_pending_analysis() {
        let (mut state, wakeups) = app_state(Panel::Queries);
        if let PanelState::Queries(query) = &mut state.active {
            query.input = "SELECT * FROM users".to_string();
            assert!(query.analyze());
        }

        state.select_panel(Panel::Architecture);
        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_pending_analysis() {
        let (mut state, wakeups) = app_state(Panel::Queries);
        if let PanelState::Queries(query) = &mut state.active {
            query.input = "SELECT 1".to_string();
            query.analyze();
        }

        state.teardown();
        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn panel_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = Panel::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), Panel::ALL.len());
    }
}
