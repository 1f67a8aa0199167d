/*!
 * Property Tests
 * Structural invariants that must hold for every policy and every input
 */

use proptest::prelude::*;
use sched_sim::{
    check_safety, summarize, Policy, ProcessDescriptor, ResourceSnapshot, Scheduler, Verdict,
};

fn arb_processes() -> impl Strategy<Value = Vec<ProcessDescriptor>> {
    prop::collection::vec((0u64..16, 1u64..8, 0u32..4), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, service, priority))| ProcessDescriptor {
                pid: format!("P{}", i + 1),
                arrival,
                service,
                priority,
            })
            .collect()
    })
}

fn arb_dispatch() -> impl Strategy<Value = (Policy, Option<u64>)> {
    prop_oneof![
        Just((Policy::Fcfs, None)),
        (1u64..5).prop_map(|quantum| (Policy::RoundRobin, Some(quantum))),
        Just((Policy::Spn, None)),
        Just((Policy::Srt, None)),
        Just((Policy::Hrrn, None)),
        Just((Policy::PriorityNonPreemptive, None)),
        Just((Policy::PriorityPreemptive, None)),
    ]
}

fn scheduler_for(policy: Policy, quantum: Option<u64>) -> Scheduler {
    match quantum {
        Some(quantum) => Scheduler::with_quantum(policy, quantum),
        None => Scheduler::new(policy),
    }
}

proptest! {
    #[test]
    fn every_policy_conserves_service(
        procs in arb_processes(),
        (policy, quantum) in arb_dispatch(),
    ) {
        let outcome = scheduler_for(policy, quantum).run(procs).unwrap();

        for (index, p) in outcome.processes.iter().enumerate() {
            prop_assert_eq!(outcome.timeline.units_for(index), p.service);
            prop_assert!(outcome.states[index].completed);
            prop_assert_eq!(outcome.states[index].remaining, 0);
            prop_assert!(outcome.states[index].finish >= p.arrival + p.service);
        }

        let makespan = outcome.states.iter().map(|s| s.finish).max().unwrap_or(0);
        prop_assert_eq!(outcome.timeline.len() as u64, makespan);
    }

    #[test]
    fn metrics_stay_in_range(
        procs in arb_processes(),
        (policy, quantum) in arb_dispatch(),
    ) {
        let outcome = scheduler_for(policy, quantum).run(procs).unwrap();
        let (rows, averages) = summarize(&outcome.processes, &outcome.states);

        for row in &rows {
            prop_assert!(row.turnaround >= row.waiting);
            prop_assert!(row.normalized_turnaround >= 1.0);
        }
        if rows.is_empty() {
            prop_assert_eq!(averages.turnaround, 0.0);
        } else {
            prop_assert!(averages.normalized_turnaround >= 1.0 - 1e-9);
        }
    }

    #[test]
    fn reruns_are_identical(
        procs in arb_processes(),
        (policy, quantum) in arb_dispatch(),
    ) {
        let scheduler = scheduler_for(policy, quantum);
        let first = scheduler.run(procs.clone()).unwrap();
        let second = scheduler.run(procs).unwrap();
        prop_assert_eq!(first, second);
    }
}

fn arb_matrices() -> impl Strategy<Value = (Vec<Vec<u64>>, Vec<Vec<u64>>, Vec<u64>)> {
    (1usize..5, 1usize..4).prop_flat_map(|(processes, resources)| {
        (
            prop::collection::vec(
                prop::collection::vec((0u64..6, 0u64..6), resources),
                processes,
            ),
            prop::collection::vec(0u64..6, resources),
        )
            .prop_map(|(cells, available)| {
                // The min/max split guarantees allocation <= max_demand.
                let allocation = cells
                    .iter()
                    .map(|row| row.iter().map(|&(a, b)| a.min(b)).collect())
                    .collect();
                let max_demand = cells
                    .iter()
                    .map(|row| row.iter().map(|&(a, b)| a.max(b)).collect())
                    .collect();
                (allocation, max_demand, available)
            })
    })
}

proptest! {
    #[test]
    fn safe_sequences_are_feasible_permutations(
        (allocation, max_demand, available) in arb_matrices(),
    ) {
        let snapshot = ResourceSnapshot::new(allocation, max_demand, available).unwrap();
        let verdict = check_safety(&snapshot);

        let mut work = snapshot.available().to_vec();
        for &i in verdict.sequence() {
            for j in 0..snapshot.resources() {
                prop_assert!(snapshot.need(i, j) <= work[j]);
            }
            for (slot, released) in work.iter_mut().zip(snapshot.allocation(i)) {
                *slot += released;
            }
        }

        if let Verdict::Safe { sequence } = &verdict {
            prop_assert_eq!(sequence.len(), snapshot.processes());
            let mut sorted = sequence.clone();
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..snapshot.processes()).collect();
            prop_assert_eq!(sorted, expected);
        }
    }
}
