// src/analysis/simulator.rs

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, Deserialize};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info};
use uuid::Uuid;

/// How long a simulated analysis stays in flight.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub estimated_improvement: u8,  // percent, 0..=100
}

impl AnalysisReport {
    /// The verdict every submission receives. The query text is never inspected.
    pub fn canned() -> Self {
        let issue = |severity, message: &str| Issue {
            severity,
            message: message.to_string(),
        };

        Self {
            issues: vec![
                issue(Severity::High, "Full table scan detected on 'users' table (50,000 rows)"),
                issue(Severity::Medium, "Missing index on frequently filtered column 'email'"),
                issue(Severity::Low, "SELECT * returns unnecessary columns"),
            ],
            recommendations: vec![
                "CREATE INDEX idx_users_email ON users(email)".to_string(),
                "Replace SELECT * with specific column names".to_string(),
                "Consider adding a composite index on (email, status) for better performance".to_string(),
                "Use EXPLAIN ANALYZE to verify execution plan improvements".to_string(),
            ],
            estimated_improvement: 85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerPhase {
    Idle,
    Analyzing,
}

/// Shared cancellation flag the delay task checks before it delivers.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Wakes whoever renders the simulator once a report is ready.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

struct PendingAnalysis {
    request_id: Uuid,
    token: CancellationToken,
    receiver: oneshot::Receiver<AnalysisReport>,
}

// Teardown can land between delivery and the wake-up.
fn wake_unless_cancelled(token: &CancellationToken, notify: &Notifier) {
    if !token.is_cancelled() {
        notify();
    }
}

/// Idle/Analyzing state machine standing in for a backend query analyzer.
///
/// `submit` flips to `Analyzing` immediately and schedules a one-shot delay on
/// the runtime. The report is picked up by `poll`, which the owning view calls
/// every frame. Dropping the simulator cancels the delay so nothing is
/// delivered into a view that no longer exists.
pub struct AnalysisSimulator {
    runtime: Handle,
    notify: Notifier,
    phase: AnalyzerPhase,
    report: Option<AnalysisReport>,
    pending: Option<PendingAnalysis>,
}

impl AnalysisSimulator {
    pub fn new(runtime: Handle, notify: Notifier) -> Self {
        Self {
            runtime,
            notify,
            phase: AnalyzerPhase::Idle,
            report: None,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> AnalyzerPhase {
        self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == AnalyzerPhase::Analyzing
    }

    /// Latest published report. Stays visible while a newer analysis runs.
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn can_submit(&self, raw_text: &str) -> bool {
        !raw_text.trim().is_empty() && !self.is_analyzing()
    }

    /// Starts an analysis. Returns `false` (and does nothing) for blank input
    /// or while another analysis is still running.
    pub fn submit(&mut self, raw_text: &str) -> bool {
        if !self.can_submit(raw_text) {
            debug!(analyzing = self.is_analyzing(), "Ignoring query analysis submission");
            return false;
        }

        let request_id = Uuid::new_v4();
        let token = CancellationToken::new();
        let (sender, receiver) = oneshot::channel();

        let task_token = token.clone();
        let notify = Arc::clone(&self.notify);
        self.runtime.spawn(async move {
            tokio::time::sleep(ANALYSIS_DELAY).await;

            if task_token.is_cancelled() {
                debug!(%request_id, "Query analysis cancelled before completion");
                return;
            }

            if sender.send(AnalysisReport::canned()).is_ok() {
                wake_unless_cancelled(&task_token, &notify);
            }
        });

        info!(%request_id, query_len = raw_text.len(), "Query analysis started");
        self.phase = AnalyzerPhase::Analyzing;
        self.pending = Some(PendingAnalysis {
            request_id,
            token,
            receiver,
        });
        true
    }

    /// Moves a delivered report into place. Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match pending.receiver.try_recv() {
            Ok(report) => {
                info!(request_id = %pending.request_id, "Query analysis completed");
                self.report = Some(report);
                self.pending = None;
                self.phase = AnalyzerPhase::Idle;
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                // Runtime shut down before the delay elapsed.
                self.pending = None;
                self.phase = AnalyzerPhase::Idle;
                true
            }
        }
    }

    /// Cancels any outstanding analysis. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
            debug!(request_id = %pending.request_id, "Query analysis torn down");
        }
        self.phase = AnalyzerPhase::Idle;
    }
}

impl Drop for AnalysisSimulator {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for AnalysisSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSimulator")
            .field("phase", &self.phase)
            .field("report", &self.report)
            .field("pending", &self.pending.as_ref().map(|p| p.request_id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_simulator() -> (AnalysisSimulator, Arc<AtomicUsize>) {
        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        let notify: Notifier = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (AnalysisSimulator::new(Handle::current(), notify), wakeups)
    }

    async fn run_to_completion(simulator: &mut AnalysisSimulator) -> AnalysisReport {
        tokio::time::sleep(ANALYSIS_DELAY + Duration::from_millis(1)).await;
        assert!(simulator.poll());
        simulator.report().cloned().expect("report should be published")
    }

    #[tokio::test(start_paused = true)]
    async fn submit_enters_analyzing_immediately() {
        let (mut simulator, _) = counting_simulator();
        assert_eq!(simulator.phase(), AnalyzerPhase::Idle);

        assert!(simulator.submit("SELECT * FROM users WHERE email = 'x'"));
        assert_eq!(simulator.phase(), AnalyzerPhase::Analyzing);
        assert!(simulator.report().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_fixed_delay_with_canned_report() {
        let (mut simulator, wakeups) = counting_simulator();
        simulator.submit("SELECT * FROM users WHERE email = 'x'");

        tokio::time::sleep(ANALYSIS_DELAY - Duration::from_millis(1)).await;
        assert!(!simulator.poll());
        assert!(simulator.is_analyzing());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(simulator.poll());
        assert_eq!(simulator.phase(), AnalyzerPhase::Idle);
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);

        let report = simulator.report().expect("report should be published");
        assert_canned(report);
    }

    fn assert_canned(report: &AnalysisReport) {
        let issues: Vec<_> = report.issues.iter()
            .map(|i| (i.severity, i.message.as_str()))
            .collect();
        assert_eq!(issues, vec![
            (Severity::High, "Full table scan detected on 'users' table (50,000 rows)"),
            (Severity::Medium, "Missing index on frequently filtered column 'email'"),
            (Severity::Low, "SELECT * returns unnecessary columns"),
        ]);
        assert_eq!(report.recommendations, vec![
            "CREATE INDEX idx_users_email ON users(email)",
            "Replace SELECT * with specific column names",
            "Consider adding a composite index on (email, status) for better performance",
            "Use EXPLAIN ANALYZE to verify execution plan improvements",
        ]);
        assert_eq!(report.estimated_improvement, 85);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_submit_while_analyzing_is_ignored() {
        let (mut simulator, wakeups) = counting_simulator();
        assert!(simulator.submit("SELECT 1"));
        assert!(!simulator.submit("SELECT 2"));
        assert!(simulator.is_analyzing());

        run_to_completion(&mut simulator).await;
        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert!(!simulator.poll());
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_schedules_nothing() {
        let (mut simulator, wakeups) = counting_simulator();
        assert!(!simulator.submit(""));
        assert!(!simulator.submit("   \n\t"));
        assert_eq!(simulator.phase(), AnalyzerPhase::Idle);

        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert!(!simulator.poll());
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
        assert!(simulator.report().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn report_ignores_query_content() {
        let (mut first, _) = counting_simulator();
        let (mut second, _) = counting_simulator();
        first.submit("SELECT 1");
        second.submit("garbage !! text");

        let a = run_to_completion(&mut first).await;
        let b = run_to_completion(&mut second).await;
        assert_canned(&a);
        assert_canned(&b);
    }

    #[test]
    fn canned_report_serializes_lowercase_severities() {
        let text: String = ron::to_string(&AnalysisReport::canned())
            .unwrap()
            .split_whitespace()
            .collect();
        assert!(text.contains("severity:high"));
        assert!(text.contains("estimated_improvement:85"));
    }

    #[test]
    fn cancelled_token_suppresses_wake_up() {
        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        let notify: Notifier = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let token = CancellationToken::new();

        wake_unless_cancelled(&token, &notify);
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);

        token.cancel();
        wake_unless_cancelled(&token, &notify);
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_prevents_late_delivery() {
        let (mut simulator, wakeups) = counting_simulator();
        simulator.submit("SELECT 1");

        tokio::time::sleep(Duration::from_millis(500)).await;
        simulator.teardown();
        assert_eq!(simulator.phase(), AnalyzerPhase::Idle);

        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert!(!simulator.poll());
        assert!(simulator.report().is_none());
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_simulator_cancels_the_delay() {
        let (mut simulator, wakeups) = counting_simulator();
        simulator.submit("SELECT 1");
        drop(simulator);

        tokio::time::sleep(ANALYSIS_DELAY * 2).await;
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn previous_report_stays_visible_during_rerun() {
        let (mut simulator, _) = counting_simulator();
        simulator.submit("SELECT 1");
        run_to_completion(&mut simulator).await;

        assert!(simulator.submit("SELECT 2"));
        assert!(simulator.is_analyzing());
        assert!(simulator.report().is_some());
    }

    #[test]
    fn severity_labels_are_lowercase() {
        assert_eq!(Severity::High.label(), "high");
        assert_eq!(Severity::Medium.label(), "medium");
        assert_eq!(Severity::Low.label(), "low");
    }
}
