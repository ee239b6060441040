// src/state/backup_state.rs
use tracing::info;

use crate::fixtures::backup::{find_backup, Backup, RestoreTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupTab {
    Backups,
    Failover,
    Retention,
    Replicas,
}

/// Restore confirmation flow. Confirming only logs the request; there is no
/// backend to restore into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreDialogState {
    pub selected_backup: Option<u32>,
    pub target: Option<RestoreTarget>,
}

impl RestoreDialogState {
    pub fn is_open(&self) -> bool {
        self.selected_backup.is_some()
    }

    pub fn backup(&self) -> Option<&'static Backup> {
        self.selected_backup.and_then(find_backup)
    }

    /// Opens the dialog for a backup. In-progress or unknown backups are ignored.
    pub fn open(&mut self, backup_id: u32) -> bool {
        match find_backup(backup_id) {
            Some(backup) if backup.is_restorable() => {
                self.selected_backup = Some(backup_id);
                true
            }
            _ => false,
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.is_open() && self.target.is_some()
    }

    pub fn cancel(&mut self) {
        self.selected_backup = None;
    }

    /// Accepts the restore and closes the dialog. The chosen target is kept
    /// for the next time the dialog opens.
    pub fn confirm(&mut self) -> Option<(u32, RestoreTarget)> {
        let (backup_id, target) = (self.selected_backup?, self.target?);
        info!(backup_id, target = target.label(), "Restore requested (no backend attached)");
        self.selected_backup = None;
        Some((backup_id, target))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackupState {
    pub tab: BackupTab,
    pub restore: RestoreDialogState,
}

impl Default for BackupState {
    fn default() -> Self {
        Self {
            tab: BackupTab::Backups,
            restore: RestoreDialogState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_requires_a_target() {
        let mut dialog = RestoreDialogState::default();
        assert!(dialog.open(1));
        assert!(dialog.is_open());
        assert!(!dialog.can_confirm());
        assert_eq!(dialog.confirm(), None);
        assert!(dialog.is_open());

        dialog.target = Some(RestoreTarget::Replica1);
        assert!(dialog.can_confirm());
        assert_eq!(dialog.confirm(), Some((1, RestoreTarget::Replica1)));
        assert!(!dialog.is_open());
    }

    #[test]
    fn cancel_clears_selection() {
        let mut dialog = RestoreDialogState::default();
        dialog.open(2);
        assert_eq!(dialog.backup().map(|b| b.kind), Some("Incremental"));

        dialog.cancel();
        assert!(!dialog.is_open());
        assert!(dialog.backup().is_none());
    }

    #[test]
    fn in_progress_backup_cannot_be_restored() {
        let mut dialog = RestoreDialogState::default();
        assert!(!dialog.open(4));
        assert!(!dialog.open(42));
        assert!(!dialog.is_open());
    }
}
