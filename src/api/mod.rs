/*!
 * External Contracts
 * The two call-level entry points consumed by presentation collaborators
 */

use crate::core::types::{Pid, Time};
use crate::process::{validate, ProcessRow, ValidationError};
use crate::safety::{check_safety, ResourceSnapshot, SafetyResult, Verdict};
use crate::scheduler::{summarize, Averages, Policy, ResultRow, Scheduler, SchedulerError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by `run_simulation`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

/// Full simulation output: the labeled timeline (`None` marks an idle
/// unit), one result row per process, and run averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub timeline: Vec<Option<Pid>>,
    pub results: Vec<ResultRow>,
    pub averages: Averages,
}

/// Safety verdict in external form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeadlockReport {
    pub safe: bool,
    /// Admission order: a complete safe sequence when `safe`, otherwise the
    /// processes the search managed to admit.
    pub sequence: Vec<usize>,
}

impl From<Verdict> for DeadlockReport {
    fn from(verdict: Verdict) -> Self {
        let safe = verdict.is_safe();
        let sequence = match verdict {
            Verdict::Safe { sequence } => sequence,
            Verdict::Unsafe { completed } => completed,
        };
        Self { safe, sequence }
    }
}

/// Validate rows, run the policy, and reduce the outcome into a report.
///
/// `quantum` is consulted only by round robin, which requires it to be at
/// least 1; other policies ignore it. A failed validation leaves no run
/// state behind.
pub fn run_simulation(
    rows: &[ProcessRow],
    policy: Policy,
    quantum: Option<Time>,
) -> Result<SimulationReport, SimulationError> {
    let descriptors = validate(rows)?;
    let scheduler = match quantum {
        Some(quantum) => Scheduler::with_quantum(policy, quantum),
        None => Scheduler::new(policy),
    };
    let outcome = scheduler.run(descriptors)?;
    let (results, averages) = summarize(&outcome.processes, &outcome.states);

    Ok(SimulationReport {
        timeline: outcome.timeline.labels(&outcome.processes),
        results,
        averages,
    })
}

/// Validate the matrices and run the safety search.
///
/// Any structural violation is reported before the fixed-point search
/// starts; a verdict is produced only from a structurally valid snapshot.
pub fn check_deadlock(
    allocation: Vec<Vec<u64>>,
    max_demand: Vec<Vec<u64>>,
    available: Vec<u64>,
) -> SafetyResult<DeadlockReport> {
    let snapshot = ResourceSnapshot::new(allocation, max_demand, available)?;
    Ok(check_safety(&snapshot).into())
}
