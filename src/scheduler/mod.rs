/*!
 * Scheduler Engine
 * Discrete-time dispatch over seven interchangeable policies
 */

mod dispatch;
mod metrics;
mod policy;
mod timeline;

pub use metrics::{summarize, Averages, ResultRow};
pub use policy::Policy;
pub use timeline::{Slot, Timeline};

use crate::core::types::{Pid, Time};
use crate::process::{ProcessDescriptor, RunState};
use log::info;
use thiserror::Error;

/// Scheduling result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("round robin requires a quantum")]
    MissingQuantum,

    #[error("invalid quantum {0}; must be at least 1")]
    InvalidQuantum(Time),

    #[error("process {pid:?} has zero service time")]
    ZeroService { pid: Pid },
}

/// Output of a single run: the timeline plus the final state of every
/// process, in the arrival-sorted order the engine dispatched them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub timeline: Timeline,
    pub processes: Vec<ProcessDescriptor>,
    pub states: Vec<RunState>,
}

/// Policy-parameterized engine.
///
/// Holds no per-run state: every `run` call sorts its own copy of the
/// process set and builds fresh run states, so nothing aliases between
/// consecutive runs and re-running a policy is always reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    policy: Policy,
    quantum: Option<Time>,
}

impl Scheduler {
    /// Create a scheduler for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: None,
        }
    }

    /// Create a scheduler with a time quantum. Only round robin consults
    /// the quantum; other policies ignore it.
    pub fn with_quantum(policy: Policy, quantum: Time) -> Self {
        Self {
            policy,
            quantum: Some(quantum),
        }
    }

    /// Get the configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Run the policy over the process set and return the execution record.
    ///
    /// Processes are stably sorted by arrival before dispatch, so every
    /// later tie-break reduces to "ascending arrival, then input order".
    /// An empty process set yields an empty timeline.
    pub fn run(&self, mut processes: Vec<ProcessDescriptor>) -> SchedulerResult<RunOutcome> {
        if let Some(bad) = processes.iter().find(|p| p.service == 0) {
            return Err(SchedulerError::ZeroService {
                pid: bad.pid.clone(),
            });
        }

        processes.sort_by_key(|p| p.arrival); // stable: equal arrivals keep input order

        info!(
            "dispatching {} processes under {}",
            processes.len(),
            self.policy
        );

        let mut run = Run::new(processes);
        match self.policy {
            Policy::Fcfs => run.fcfs(),
            Policy::RoundRobin => {
                let quantum = match self.quantum {
                    None => return Err(SchedulerError::MissingQuantum),
                    Some(0) => return Err(SchedulerError::InvalidQuantum(0)),
                    Some(quantum) => quantum,
                };
                run.round_robin(quantum);
            }
            Policy::Spn => run.spn(),
            Policy::Srt => run.srt(),
            Policy::Hrrn => run.hrrn(),
            Policy::PriorityNonPreemptive => run.priority_non_preemptive(),
            Policy::PriorityPreemptive => run.priority_preemptive(),
        }

        Ok(run.into_outcome())
    }
}

/// Per-run mutable state. Descriptors and states live in parallel vectors
/// and are addressed by index everywhere; no references are retained.
struct Run {
    procs: Vec<ProcessDescriptor>,
    states: Vec<RunState>,
    timeline: Timeline,
    clock: Time,
}

impl Run {
    fn new(procs: Vec<ProcessDescriptor>) -> Self {
        let states = procs.iter().map(RunState::reset).collect();
        Self {
            procs,
            states,
            timeline: Timeline::default(),
            clock: 0,
        }
    }

    fn into_outcome(self) -> RunOutcome {
        RunOutcome {
            timeline: self.timeline,
            processes: self.procs,
            states: self.states,
        }
    }
}
