/*!
 * Run Metrics
 * Derive per-process results and run averages from post-run state
 */

use crate::core::types::{Pid, Time};
use crate::process::{ProcessDescriptor, RunState};
use serde::{Deserialize, Serialize};

/// Per-process results derived from a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResultRow {
    pub pid: Pid,
    pub finish: Time,
    /// finish - arrival
    pub turnaround: Time,
    /// turnaround - service
    pub waiting: Time,
    /// turnaround / service
    pub normalized_turnaround: f64,
}

/// Arithmetic means across all processes; all zero for an empty run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub turnaround: f64,
    pub waiting: f64,
    pub normalized_turnaround: f64,
}

/// Reduce post-run state into result rows and averages.
///
/// Pure function of the descriptor/state pairs; rows come back in the same
/// order the pairs are given in.
pub fn summarize(
    processes: &[ProcessDescriptor],
    states: &[RunState],
) -> (Vec<ResultRow>, Averages) {
    let mut rows = Vec::with_capacity(processes.len());
    let mut total_turnaround: Time = 0;
    let mut total_waiting: Time = 0;
    let mut total_normalized = 0.0f64;

    for (descriptor, state) in processes.iter().zip(states) {
        let turnaround = state.finish - descriptor.arrival;
        let waiting = turnaround - descriptor.service;
        let normalized = turnaround as f64 / descriptor.service as f64;

        total_turnaround += turnaround;
        total_waiting += waiting;
        total_normalized += normalized;

        rows.push(ResultRow {
            pid: descriptor.pid.clone(),
            finish: state.finish,
            turnaround,
            waiting,
            normalized_turnaround: normalized,
        });
    }

    let averages = if rows.is_empty() {
        Averages {
            turnaround: 0.0,
            waiting: 0.0,
            normalized_turnaround: 0.0,
        }
    } else {
        let count = rows.len() as f64;
        Averages {
            turnaround: total_turnaround as f64 / count,
            waiting: total_waiting as f64 / count,
            normalized_turnaround: total_normalized / count,
        }
    };

    (rows, averages)
}
