// src/fixtures/queries.rs
use super::StatCard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceComparison {
    pub query: &'static str,
    pub before_ms: f64,
    pub after_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedOptimization {
    pub query: &'static str,
    pub issue: &'static str,
    pub solution: &'static str,
    pub improvement: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionPlanStep {
    pub step: &'static str,
    pub cost: f64,
    pub rows: u64,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHistorySample {
    pub time: &'static str,
    pub avg_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

pub const QUERY_STATS: [StatCard; 4] = [
    StatCard::highlighted("Avg Query Time", "180ms", "-88%", "from 1.5s"),
    StatCard::new("CPU Reduction", "28%", "Lower DB CPU usage"),
    StatCard::new("Slow Queries", "3", "Down from 47"),
    StatCard::new("Indexes Added", "12", "Covering indexes"),
];

pub const PERFORMANCE_COMPARISON: &[PerformanceComparison] = &[
    PerformanceComparison { query: "User Lookup", before_ms: 1500.0, after_ms: 180.0 },
    PerformanceComparison { query: "Order History", before_ms: 2200.0, after_ms: 320.0 },
    PerformanceComparison { query: "Product Search", before_ms: 1800.0, after_ms: 240.0 },
    PerformanceComparison { query: "Analytics", before_ms: 3500.0, after_ms: 450.0 },
    PerformanceComparison { query: "Dashboard", before_ms: 1200.0, after_ms: 150.0 },
];

pub const APPLIED_OPTIMIZATIONS: &[AppliedOptimization] = &[
    AppliedOptimization {
        query: "SELECT * FROM users WHERE email = ?",
        issue: "Full table scan",
        solution: "Added covering index on email column",
        improvement: "88% faster",
        before: "1.5s",
        after: "180ms",
    },
    AppliedOptimization {
        query: "SELECT orders.* FROM orders JOIN users...",
        issue: "Inefficient join",
        solution: "Rewrote with subquery + index on user_id",
        improvement: "85% faster",
        before: "2.2s",
        after: "320ms",
    },
    AppliedOptimization {
        query: "SELECT COUNT(*) FROM products WHERE...",
        issue: "Slow aggregation",
        solution: "Added composite index on category + status",
        improvement: "87% faster",
        before: "1.8s",
        after: "240ms",
    },
];

pub const EXECUTION_PLAN: &[ExecutionPlanStep] = &[
    ExecutionPlanStep { step: "Table Scan", cost: 1200.0, rows: 50_000, time: "850ms" },
    ExecutionPlanStep { step: "Index Seek", cost: 45.0, rows: 120, time: "12ms" },
    ExecutionPlanStep { step: "Nested Loop", cost: 180.0, rows: 120, time: "45ms" },
    ExecutionPlanStep { step: "Sort", cost: 90.0, rows: 120, time: "28ms" },
];

pub const QUERY_HISTORY: &[QueryHistorySample] = &[
    QueryHistorySample { time: "00:00", avg_ms: 1200.0, p95_ms: 1800.0, p99_ms: 2400.0 },
    QueryHistorySample { time: "04:00", avg_ms: 980.0, p95_ms: 1500.0, p99_ms: 2100.0 },
    QueryHistorySample { time: "08:00", avg_ms: 1450.0, p95_ms: 2200.0, p99_ms: 3000.0 },
    QueryHistorySample { time: "12:00", avg_ms: 320.0, p95_ms: 480.0, p99_ms: 650.0 },
    QueryHistorySample { time: "16:00", avg_ms: 280.0, p95_ms: 420.0, p99_ms: 580.0 },
    QueryHistorySample { time: "20:00", avg_ms: 310.0, p95_ms: 460.0, p99_ms: 620.0 },
];

pub const HISTORY_NOTE: &str = "Significant performance improvement detected at 12:00 after applying index \
optimizations. Query times reduced by 78% and have remained stable since deployment.";
