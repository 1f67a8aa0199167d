/*!
 * Dispatch Loops
 * One loop per policy; all share the idle rule and the ready-set scan
 */

use super::timeline::Slot;
use super::Run;
use crate::core::types::Time;
use log::debug;
use std::collections::VecDeque;

impl Run {
    /// Append one idle unit.
    fn idle(&mut self) {
        self.timeline.push(Slot::Idle);
        self.clock += 1;
    }

    /// Execute `units` consecutive units of process `index`.
    fn execute(&mut self, index: usize, units: Time) {
        for _ in 0..units {
            self.timeline.push(Slot::Busy(index));
        }
        self.clock += units;
        self.states[index].remaining -= units;
    }

    /// Mark `index` finished at the current clock and drop it from all
    /// further ready-set consideration.
    fn complete(&mut self, index: usize) {
        let state = &mut self.states[index];
        state.completed = true;
        state.finish = self.clock;
        debug!(
            "process {} finished at t={}",
            self.procs[index].pid, self.clock
        );
    }

    fn all_completed(&self) -> bool {
        self.states.iter().all(|state| state.completed)
    }

    /// Arrived and not yet completed at the current clock.
    fn is_ready(&self, index: usize) -> bool {
        self.procs[index].arrival <= self.clock && !self.states[index].completed
    }

    /// Ready-set scan keeping the first index that minimizes `key`.
    ///
    /// The descriptor list is arrival-sorted with input order preserved on
    /// equal arrivals, so first-wins encodes the tie-break: ascending
    /// arrival, then original input order.
    fn select_min_by_key<K: Ord>(&self, key: impl Fn(&Self, usize) -> K) -> Option<usize> {
        let mut best: Option<(usize, K)> = None;
        for index in 0..self.procs.len() {
            if !self.is_ready(index) {
                continue;
            }
            let candidate = key(self, index);
            match &best {
                Some((_, incumbent)) if *incumbent <= candidate => {}
                _ => best = Some((index, candidate)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Ready-set scan keeping the first index that maximizes the response
    /// ratio, recomputed from the current clock.
    fn select_highest_response_ratio(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for index in 0..self.procs.len() {
            if !self.is_ready(index) {
                continue;
            }
            best = match best {
                Some(incumbent) if !self.response_ratio_exceeds(index, incumbent) => {
                    Some(incumbent)
                }
                _ => Some(index),
            };
        }
        best
    }

    /// Whether process `a` has a strictly higher response ratio than `b`.
    /// Ratio is (waiting + service) / service; compared via cross products
    /// so equal ratios never flip the scan's first-wins tie-break.
    fn response_ratio_exceeds(&self, a: usize, b: usize) -> bool {
        let numerator = |index: usize| {
            let waiting = self.clock - self.procs[index].arrival;
            u128::from(waiting + self.procs[index].service)
        };
        numerator(a) * u128::from(self.procs[b].service)
            > numerator(b) * u128::from(self.procs[a].service)
    }

    /// Strict arrival order, each process runs to completion.
    pub(super) fn fcfs(&mut self) {
        for index in 0..self.procs.len() {
            while self.clock < self.procs[index].arrival {
                self.idle();
            }
            self.execute(index, self.states[index].remaining);
            self.complete(index);
        }
    }

    /// FIFO queue with a fixed quantum. Processes that arrive while a slice
    /// runs enter the queue before the preempted process re-enters it; that
    /// ordering is observable in the timeline and must not be reordered.
    pub(super) fn round_robin(&mut self, quantum: Time) {
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut next = 0;

        while next < self.procs.len() || !queue.is_empty() {
            while next < self.procs.len() && self.procs[next].arrival <= self.clock {
                queue.push_back(next);
                next += 1;
            }

            let Some(index) = queue.pop_front() else {
                self.idle();
                continue;
            };

            let slice = quantum.min(self.states[index].remaining);
            self.execute(index, slice);

            while next < self.procs.len() && self.procs[next].arrival <= self.clock {
                queue.push_back(next);
                next += 1;
            }

            if self.states[index].remaining > 0 {
                queue.push_back(index);
            } else {
                self.complete(index);
            }
        }
    }

    /// Minimum service time among ready, run to completion.
    pub(super) fn spn(&mut self) {
        while !self.all_completed() {
            match self.select_min_by_key(|run, index| run.procs[index].service) {
                Some(index) => {
                    self.execute(index, self.states[index].remaining);
                    self.complete(index);
                }
                None => self.idle(),
            }
        }
    }

    /// Minimum remaining time among ready, one unit at a time.
    pub(super) fn srt(&mut self) {
        while !self.all_completed() {
            match self.select_min_by_key(|run, index| run.states[index].remaining) {
                Some(index) => {
                    self.execute(index, 1);
                    if self.states[index].remaining == 0 {
                        self.complete(index);
                    }
                }
                None => self.idle(),
            }
        }
    }

    /// Highest response ratio among ready, run to completion.
    pub(super) fn hrrn(&mut self) {
        while !self.all_completed() {
            match self.select_highest_response_ratio() {
                Some(index) => {
                    self.execute(index, self.states[index].remaining);
                    self.complete(index);
                }
                None => self.idle(),
            }
        }
    }

    /// Minimum priority value among ready, run to completion.
    pub(super) fn priority_non_preemptive(&mut self) {
        while !self.all_completed() {
            match self.select_min_by_key(|run, index| run.procs[index].priority) {
                Some(index) => {
                    self.execute(index, self.states[index].remaining);
                    self.complete(index);
                }
                None => self.idle(),
            }
        }
    }

    /// Minimum priority value among ready, one unit at a time.
    pub(super) fn priority_preemptive(&mut self) {
        while !self.all_completed() {
            match self.select_min_by_key(|run, index| run.procs[index].priority) {
                Some(index) => {
                    self.execute(index, 1);
                    if self.states[index].remaining == 0 {
                        self.complete(index);
                    }
                }
                None => self.idle(),
            }
        }
    }
}
