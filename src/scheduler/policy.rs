/*!
 * Scheduling Policies
 * The seven dispatch policies and their coarse properties
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispatch policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come, first-served: strict arrival order, run to completion.
    Fcfs,
    /// FIFO ready queue with a fixed time quantum.
    RoundRobin,
    /// Shortest process next: minimum service time among ready.
    Spn,
    /// Shortest remaining time: minimum remaining, re-evaluated every unit.
    Srt,
    /// Highest response ratio next, recomputed at each dispatch decision.
    Hrrn,
    /// Minimum priority value among ready, run to completion.
    PriorityNonPreemptive,
    /// Minimum priority value among ready, re-evaluated every unit.
    PriorityPreemptive,
}

impl Policy {
    /// Whether the policy can take the CPU away from an unfinished process.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Policy::RoundRobin | Policy::Srt | Policy::PriorityPreemptive
        )
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fcfs => "FCFS",
            Policy::RoundRobin => "Round Robin",
            Policy::Spn => "SPN",
            Policy::Srt => "SRT",
            Policy::Hrrn => "HRRN",
            Policy::PriorityNonPreemptive => "Priority (non-preemptive)",
            Policy::PriorityPreemptive => "Priority (preemptive)",
        };
        f.write_str(name)
    }
}
