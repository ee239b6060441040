// src/fixtures/backup.rs
use chrono::NaiveDateTime;

use super::{Detail, StatCard};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    Completed,
    InProgress,
}

impl BackupStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackupStatus::Completed => "completed",
            BackupStatus::InProgress => "in-progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backup {
    pub id: u32,
    pub kind: &'static str,
    pub timestamp: &'static str,
    pub size: &'static str,
    pub status: BackupStatus,
    pub duration: &'static str,
    pub retention: &'static str,
    pub location: &'static str,
}

impl Backup {
    pub fn taken_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Only finished backups can be offered as a restore source.
    pub fn is_restorable(&self) -> bool {
        self.status == BackupStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailoverTest {
    pub date: &'static str,
    pub scenario: &'static str,
    pub rto: &'static str,
    pub rpo: &'static str,
    pub passed: bool,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionPolicy {
    pub kind: &'static str,
    pub retention: &'static str,
    pub frequency: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Active,
    Syncing,
}

impl SyncState {
    pub fn label(&self) -> &'static str {
        match self {
            SyncState::Active => "active",
            SyncState::Syncing => "syncing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicaHealth {
    pub name: &'static str,
    pub role: &'static str,
    pub state: SyncState,
    pub lag: &'static str,
    pub health: u8,  // 0..=100
}

/// Where a restore would be written to. Nothing is ever actually restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTarget {
    Primary,
    Replica1,
    Replica2,
    NewInstance,
}

impl RestoreTarget {
    pub const ALL: [RestoreTarget; 4] = [
        RestoreTarget::Primary,
        RestoreTarget::Replica1,
        RestoreTarget::Replica2,
        RestoreTarget::NewInstance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RestoreTarget::Primary => "Primary Database",
            RestoreTarget::Replica1 => "Replica 1 (Testing)",
            RestoreTarget::Replica2 => "Replica 2 (Testing)",
            RestoreTarget::NewInstance => "New Database Instance",
        }
    }
}

pub const BACKUP_STATS: [StatCard; 4] = [
    StatCard::highlighted("Recovery Time", "2m 15s", "-50%", "RTO improvement"),
    StatCard::new("Last Backup", "45m ago", "Incremental backup"),
    StatCard::new("Backup Success", "100%", "Last 30 days"),
    StatCard::new("Failover Tests", "3/3", "All tests passed"),
];

pub const BACKUPS: &[Backup] = &[
    Backup {
        id: 1,
        kind: "Full Backup",
        timestamp: "2025-10-17 02:00:00",
        size: "24.3 GB",
        status: BackupStatus::Completed,
        duration: "8m 32s",
        retention: "30 days",
        location: "s3://backups/mysql/full/",
    },
    Backup {
        id: 2,
        kind: "Incremental",
        timestamp: "2025-10-17 08:00:00",
        size: "1.2 GB",
        status: BackupStatus::Completed,
        duration: "1m 15s",
        retention: "7 days",
        location: "s3://backups/mysql/incremental/",
    },
    Backup {
        id: 3,
        kind: "Incremental",
        timestamp: "2025-10-17 14:00:00",
        size: "1.8 GB",
        status: BackupStatus::Completed,
        duration: "1m 42s",
        retention: "7 days",
        location: "s3://backups/mysql/incremental/",
    },
    Backup {
        id: 4,
        kind: "Incremental",
        timestamp: "2025-10-17 20:00:00",
        size: "2.1 GB",
        status: BackupStatus::InProgress,
        duration: "0m 45s",
        retention: "7 days",
        location: "s3://backups/mysql/incremental/",
    },
];

pub const SCHEDULE_NOTE: &str = "Next full backup scheduled for tomorrow at 2:00 AM. Incremental backups run \
every 6 hours. Point-in-time recovery available for the last 72 hours.";

pub const FAILOVER_TESTS: &[FailoverTest] = &[
    FailoverTest {
        date: "2025-10-15",
        scenario: "Primary failure simulation",
        rto: "2m 15s",
        rpo: "< 1 min",
        passed: true,
        notes: "Automatic failover to Replica 1",
    },
    FailoverTest {
        date: "2025-10-10",
        scenario: "Network partition test",
        rto: "2m 42s",
        rpo: "< 1 min",
        passed: true,
        notes: "DNS re-routing successful",
    },
    FailoverTest {
        date: "2025-10-05",
        scenario: "Data corruption recovery",
        rto: "3m 18s",
        rpo: "5 min",
        passed: true,
        notes: "Restored from last full backup",
    },
];

pub const AUTOMATIC_FAILOVER: &[Detail] = &[
    ("Health Check Interval", "10 seconds"),
    ("Failure Threshold", "3 consecutive failures"),
    ("Failover Timeout", "5 minutes"),
    ("Auto-Recovery", "Enabled"),
];

pub const RECOVERY_OBJECTIVES: &[Detail] = &[
    ("Target RTO", "< 3 minutes"),
    ("Target RPO", "< 1 minute"),
    ("Actual RTO (Avg)", "2m 38s"),
    ("Actual RPO (Avg)", "< 1 minute"),
];

pub const RETENTION_POLICIES: &[RetentionPolicy] = &[
    RetentionPolicy { kind: "Full Backups", retention: "30 days", frequency: "Daily at 2:00 AM", count: 30 },
    RetentionPolicy { kind: "Incremental Backups", retention: "7 days", frequency: "Every 6 hours", count: 28 },
    RetentionPolicy { kind: "Transaction Logs", retention: "3 days", frequency: "Every 15 minutes", count: 288 },
];

pub const RETENTION_NOTE: &str = "Total backup storage: 156.8 GB across all retention policies. Oldest backups \
are automatically purged based on retention rules.";

pub const REPLICA_HEALTH: &[ReplicaHealth] = &[
    ReplicaHealth { name: "Primary", role: "Master", state: SyncState::Active, lag: "0s", health: 100 },
    ReplicaHealth { name: "Replica 1", role: "Standby", state: SyncState::Syncing, lag: "0.2s", health: 98 },
    ReplicaHealth { name: "Replica 2", role: "Standby", state: SyncState::Syncing, lag: "0.5s", health: 95 },
];

pub fn find_backup(id: u32) -> Option<&'static Backup> {
    BACKUPS.iter().find(|b| b.id == id)
}
