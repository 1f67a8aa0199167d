/*!
 * Process Types
 * Raw input rows, validated descriptors, and per-run execution state
 */

use crate::core::types::{Pid, Priority, Time};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation result
pub type ProcessResult<T> = Result<T, ValidationError>;

/// Process-row validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("row {row}: missing pid")]
    MissingPid { row: usize },

    #[error("row {row}: duplicate pid {pid:?}")]
    DuplicatePid { row: usize, pid: String },

    #[error("row {row}: invalid arrival time {value}; must be a non-negative integer")]
    InvalidArrival { row: usize, value: i64 },

    #[error("row {row}: invalid service time {value}; must be a positive integer")]
    InvalidService { row: usize, value: i64 },

    #[error("row {row}: invalid priority {value}; must be a non-negative integer")]
    InvalidPriority { row: usize, value: i64 },
}

/// Raw process table row as supplied by a caller. Not yet validated; the
/// signed fields exist so out-of-range input can be rejected with context
/// instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRow {
    pub pid: String,
    pub arrival: i64,
    pub service: i64,
    #[serde(default)]
    pub priority: i64,
}

impl ProcessRow {
    pub fn new(pid: impl Into<String>, arrival: i64, service: i64, priority: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            service,
            priority,
        }
    }
}

/// Validated process facts. Immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub arrival: Time,
    /// Total burst length. Always greater than zero.
    pub service: Time,
    pub priority: Priority,
}

/// Mutable execution state, one per descriptor per run. Never shared across
/// runs; every run starts from a fresh reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunState {
    /// Unexecuted burst units. Invariant: never exceeds the descriptor's
    /// service time and never goes negative.
    pub remaining: Time,
    pub completed: bool,
    /// Time unit at which the process completed. Zero until `completed`.
    pub finish: Time,
}

impl RunState {
    /// Fresh state for the start of a run.
    pub fn reset(descriptor: &ProcessDescriptor) -> Self {
        Self {
            remaining: descriptor.service,
            completed: false,
            finish: 0,
        }
    }
}
