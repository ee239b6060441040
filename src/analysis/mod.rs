// src/analysis/mod.rs
pub mod simulator;

pub use simulator::{AnalysisReport, AnalysisSimulator, Notifier, Severity};
