/*!
 * Process Row Validation
 * Exhaustive per-row checks performed before any run state exists
 */

use super::types::{ProcessDescriptor, ProcessResult, ProcessRow, ValidationError};
use crate::core::types::{Priority, Time};
use ahash::AHashSet;

/// Validate raw rows into descriptors.
///
/// Rows are checked in input order and the first violation aborts the whole
/// batch; callers never observe a partially validated list.
pub fn validate(rows: &[ProcessRow]) -> ProcessResult<Vec<ProcessDescriptor>> {
    let mut descriptors = Vec::with_capacity(rows.len());
    let mut seen = AHashSet::with_capacity(rows.len());

    for (row, raw) in rows.iter().enumerate() {
        if raw.pid.is_empty() {
            return Err(ValidationError::MissingPid { row });
        }
        if !seen.insert(raw.pid.clone()) {
            return Err(ValidationError::DuplicatePid {
                row,
                pid: raw.pid.clone(),
            });
        }

        let arrival = Time::try_from(raw.arrival).map_err(|_| ValidationError::InvalidArrival {
            row,
            value: raw.arrival,
        })?;
        let service = match Time::try_from(raw.service) {
            Ok(service) if service > 0 => service,
            _ => {
                return Err(ValidationError::InvalidService {
                    row,
                    value: raw.service,
                })
            }
        };
        let priority =
            Priority::try_from(raw.priority).map_err(|_| ValidationError::InvalidPriority {
                row,
                value: raw.priority,
            })?;

        descriptors.push(ProcessDescriptor {
            pid: raw.pid.clone(),
            arrival,
            service,
            priority,
        });
    }

    Ok(descriptors)
}
