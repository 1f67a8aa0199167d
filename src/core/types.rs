/*!
 * Core Types
 * Common type aliases used across the simulator
 */

/// Process identifier. Non-empty and unique within a run.
pub type Pid = String;

/// Discrete time, counted in whole units from the start of a run.
pub type Time = u64;

/// Priority level; lower values are served first.
pub type Priority = u32;
