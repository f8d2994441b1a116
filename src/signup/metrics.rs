//! Signup funnel metrics: how far users get and how submissions end.

use super::step::Step;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for one signup funnel.
pub struct FunnelMetrics {
    /// Times each step was entered, indexed by `Step::index`
    steps_reached: [AtomicUsize; Step::COUNT],

    /// Calls handed to the account service
    submissions: AtomicUsize,

    /// Submissions the account service rejected or failed
    submission_failures: AtomicUsize,
}

static METRICS: OnceLock<FunnelMetrics> = OnceLock::new();

impl FunnelMetrics {
    pub fn new() -> Self {
        Self {
            steps_reached: Default::default(),
            submissions: AtomicUsize::new(0),
            submission_failures: AtomicUsize::new(0),
        }
    }

    /// Process-wide funnel, used by flows that are not given their own.
    pub fn global() -> &'static FunnelMetrics {
        METRICS.get_or_init(FunnelMetrics::new)
    }

    pub fn record_step_reached(&self, step: Step) {
        self.steps_reached[step.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_failure(&self) {
        self.submission_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn steps_reached(&self, step: Step) -> usize {
        self.steps_reached[step.index()].load(Ordering::Relaxed)
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::Relaxed)
    }

    pub fn submission_failures(&self) -> usize {
        self.submission_failures.load(Ordering::Relaxed)
    }

    /// Snapshot of the current counters.
    pub fn report(&self) -> FunnelReport {
        let submissions = self.submissions();
        let failures = self.submission_failures();
        let success_rate = if submissions > 0 {
            (submissions.saturating_sub(failures) as f64 / submissions as f64) * 100.0
        } else {
            0.0
        };

        FunnelReport {
            steps: Step::ALL
                .iter()
                .map(|&step| StepCount {
                    step: step.as_str(),
                    reached: self.steps_reached(step),
                })
                .collect(),
            submissions,
            submission_failures: failures,
            submission_success_rate: success_rate,
        }
    }
}

impl Default for FunnelMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepCount {
    pub step: &'static str,
    pub reached: usize,
}

/// Funnel statistics at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelReport {
    pub steps: Vec<StepCount>,
    pub submissions: usize,
    pub submission_failures: usize,
    /// Percentage (0-100) of submissions that succeeded
    pub submission_success_rate: f64,
}
