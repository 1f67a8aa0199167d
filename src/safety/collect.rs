/*!
 * Matrix Collection
 * Sequential pull of resource matrices from an external source
 */

use super::types::{ResourceSnapshot, SafetyError, SafetyResult};

/// One cell the collector asks for. Cells are requested in a fixed order:
/// every allocation cell, then every max-demand cell, then every available
/// count, each row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRequest {
    Allocation { process: usize, resource: usize },
    MaxDemand { process: usize, resource: usize },
    Available { resource: usize },
}

/// Supplies matrix cells one at a time.
///
/// Returning `None` cancels the whole collection; no partial snapshot
/// survives a cancellation.
pub trait CellSource {
    fn request(&mut self, cell: CellRequest) -> Option<u64>;
}

/// Materialize a full snapshot from `source`, or abort on the first
/// cancellation or inconsistent cell.
pub fn collect_snapshot(
    processes: usize,
    resources: usize,
    source: &mut dyn CellSource,
) -> SafetyResult<ResourceSnapshot> {
    if processes == 0 || resources == 0 {
        return Err(SafetyError::InvalidDimensions {
            processes,
            resources,
        });
    }

    let mut allocation = vec![vec![0u64; resources]; processes];
    for (i, row) in allocation.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = source
                .request(CellRequest::Allocation {
                    process: i,
                    resource: j,
                })
                .ok_or(SafetyError::Cancelled)?;
        }
    }

    let mut max_demand = vec![vec![0u64; resources]; processes];
    for (i, row) in max_demand.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let value = source
                .request(CellRequest::MaxDemand {
                    process: i,
                    resource: j,
                })
                .ok_or(SafetyError::Cancelled)?;
            // A max cell below the already-entered allocation aborts here,
            // before the rest of the matrix is pulled.
            if allocation[i][j] > value {
                return Err(SafetyError::AllocationExceedsMax {
                    process: i,
                    resource: j,
                    allocated: allocation[i][j],
                    max_demand: value,
                });
            }
            *cell = value;
        }
    }

    let mut available = vec![0u64; resources];
    for (j, cell) in available.iter_mut().enumerate() {
        *cell = source
            .request(CellRequest::Available { resource: j })
            .ok_or(SafetyError::Cancelled)?;
    }

    ResourceSnapshot::new(allocation, max_demand, available)
}
