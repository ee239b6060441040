// src/fixtures/replication.rs
use super::StatCard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputSample {
    pub time: &'static str,
    pub primary: f64,
    pub replica1: f64,
    pub replica2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Primary,
    Replica,
}

impl NodeRole {
    pub fn label(&self) -> &'static str {
        match self {
            NodeRole::Primary => "Primary",
            NodeRole::Replica => "Replica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicaNode {
    pub name: &'static str,
    pub role: NodeRole,
    pub queries: &'static str,
    pub lag: &'static str,
    pub cpu: &'static str,
    pub memory: &'static str,
}

pub const REPLICATION_STATS: [StatCard; 4] = [
    StatCard::highlighted("Total Throughput", "6.6K/s", "+100%", "from baseline"),
    StatCard::new("Avg Replication Lag", "15ms", "Within SLA target"),
    StatCard::new("Active Replicas", "2/2", "All replicas healthy"),
    StatCard::new("Uptime", "99.98%", "Last 30 days"),
];

/// Queries per second seen by each node over one day.
pub const REPLICATION_THROUGHPUT: &[ThroughputSample] = &[
    ThroughputSample { time: "00:00", primary: 2400.0, replica1: 2380.0, replica2: 2390.0 },
    ThroughputSample { time: "04:00", primary: 2210.0, replica1: 2200.0, replica2: 2195.0 },
    ThroughputSample { time: "08:00", primary: 2890.0, replica1: 2870.0, replica2: 2880.0 },
    ThroughputSample { time: "12:00", primary: 3200.0, replica1: 3180.0, replica2: 3190.0 },
    ThroughputSample { time: "16:00", primary: 3100.0, replica1: 3085.0, replica2: 3090.0 },
    ThroughputSample { time: "20:00", primary: 2600.0, replica1: 2590.0, replica2: 2585.0 },
    ThroughputSample { time: "23:59", primary: 2300.0, replica1: 2290.0, replica2: 2295.0 },
];

pub const REPLICA_NODES: &[ReplicaNode] = &[
    ReplicaNode {
        name: "MySQL Primary",
        role: NodeRole::Primary,
        queries: "3.2K/s",
        lag: "0ms",
        cpu: "42%",
        memory: "8.2GB",
    },
    ReplicaNode {
        name: "Replica 1 (us-east)",
        role: NodeRole::Replica,
        queries: "1.8K/s",
        lag: "12ms",
        cpu: "28%",
        memory: "7.9GB",
    },
    ReplicaNode {
        name: "Replica 2 (us-west)",
        role: NodeRole::Replica,
        queries: "1.6K/s",
        lag: "18ms",
        cpu: "24%",
        memory: "7.8GB",
    },
];
