/*!
 * Execution Timeline
 * One slot per elapsed time unit, immutable once a run returns it
 */

use crate::core::types::{Pid, Time};
use crate::process::ProcessDescriptor;

/// One unit on the discrete time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// No ready process existed at this unit.
    Idle,
    /// The process at this index into the run's arrival-sorted descriptor
    /// list held the CPU for this unit.
    Busy(usize),
}

/// Ordered execution record. Its length equals the makespan of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    slots: Vec<Slot>,
}

impl Timeline {
    pub(super) fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total units during which the given descriptor index held the CPU.
    pub fn units_for(&self, index: usize) -> Time {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Busy(i) if *i == index))
            .count() as Time
    }

    /// Project slots onto pids for external consumers; `None` marks idle.
    /// `processes` must be the descriptor list returned with this timeline.
    pub fn labels(&self, processes: &[ProcessDescriptor]) -> Vec<Option<Pid>> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Busy(index) => Some(processes[*index].pid.clone()),
                Slot::Idle => None,
            })
            .collect()
    }
}
