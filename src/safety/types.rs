/*!
 * Resource State Types
 * Validated allocation/max-demand/available matrices for the safety check
 */

use thiserror::Error;

/// Safety check result
pub type SafetyResult<T> = Result<T, SafetyError>;

/// Resource matrix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SafetyError {
    #[error("need at least one process and one resource type (got {processes} x {resources})")]
    InvalidDimensions { processes: usize, resources: usize },

    #[error("{matrix} has {found} rows, expected {expected}")]
    RowCountMismatch {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{matrix} row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        matrix: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "allocation exceeds max demand for process {process}, resource {resource} \
         ({allocated} > {max_demand})"
    )]
    AllocationExceedsMax {
        process: usize,
        resource: usize,
        allocated: u64,
        max_demand: u64,
    },

    #[error("matrix entry cancelled; no verdict produced")]
    Cancelled,
}

/// Snapshot of the resource state, validated on construction: a snapshot
/// that exists is non-empty, rectangular, and satisfies
/// `allocation[i][j] <= max_demand[i][j]` in every cell.
///
/// Built fresh per detection call and discarded after the verdict; nothing
/// is carried across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSnapshot {
    allocation: Vec<Vec<u64>>,
    max_demand: Vec<Vec<u64>>,
    available: Vec<u64>,
}

impl ResourceSnapshot {
    /// Validate and take ownership of the three matrices.
    ///
    /// Cells are checked in (process, resource) scan order, so the first
    /// offending pair is the one reported.
    pub fn new(
        allocation: Vec<Vec<u64>>,
        max_demand: Vec<Vec<u64>>,
        available: Vec<u64>,
    ) -> SafetyResult<Self> {
        let processes = allocation.len();
        let resources = available.len();
        if processes == 0 || resources == 0 {
            return Err(SafetyError::InvalidDimensions {
                processes,
                resources,
            });
        }
        if max_demand.len() != processes {
            return Err(SafetyError::RowCountMismatch {
                matrix: "max_demand",
                expected: processes,
                found: max_demand.len(),
            });
        }
        for (name, matrix) in [("allocation", &allocation), ("max_demand", &max_demand)] {
            for (row, cells) in matrix.iter().enumerate() {
                if cells.len() != resources {
                    return Err(SafetyError::RaggedMatrix {
                        matrix: name,
                        row,
                        expected: resources,
                        found: cells.len(),
                    });
                }
            }
        }
        for (i, (allocated_row, max_row)) in allocation.iter().zip(&max_demand).enumerate() {
            for (j, (&allocated, &max)) in allocated_row.iter().zip(max_row).enumerate() {
                if allocated > max {
                    return Err(SafetyError::AllocationExceedsMax {
                        process: i,
                        resource: j,
                        allocated,
                        max_demand: max,
                    });
                }
            }
        }

        Ok(Self {
            allocation,
            max_demand,
            available,
        })
    }

    pub fn processes(&self) -> usize {
        self.allocation.len()
    }

    pub fn resources(&self) -> usize {
        self.available.len()
    }

    pub fn allocation(&self, process: usize) -> &[u64] {
        &self.allocation[process]
    }

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// Outstanding need for one cell: max demand minus current allocation.
    /// Never underflows thanks to the construction check.
    pub fn need(&self, process: usize, resource: usize) -> u64 {
        self.max_demand[process][resource] - self.allocation[process][resource]
    }
}
