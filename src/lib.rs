/*!
 * Scheduling Simulator Library
 * Discrete-time CPU scheduling over seven dispatch policies, derived
 * performance metrics, and a Banker's-style resource-safety detector
 */

pub mod api;
pub mod core;
pub mod process;
pub mod safety;
pub mod scheduler;

// Re-exports
pub use api::{check_deadlock, run_simulation, DeadlockReport, SimulationError, SimulationReport};
pub use process::{validate, ProcessDescriptor, ProcessRow, RunState, ValidationError};
pub use safety::{
    check_safety, collect_snapshot, CellRequest, CellSource, ResourceSnapshot, SafetyError,
    Verdict,
};
pub use scheduler::{
    summarize, Averages, Policy, ResultRow, RunOutcome, Scheduler, SchedulerError, Slot, Timeline,
};
