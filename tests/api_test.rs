/*!
 * Contract Tests
 * The two external entry points, end to end
 */

use pretty_assertions::assert_eq;
use sched_sim::{
    check_deadlock, run_simulation, Policy, ProcessRow, SafetyError, SchedulerError,
    SimulationError, SimulationReport, ValidationError,
};

fn rows() -> Vec<ProcessRow> {
    vec![
        ProcessRow::new("P1", 0, 5, 3),
        ProcessRow::new("P2", 1, 3, 1),
        ProcessRow::new("P3", 2, 8, 2),
    ]
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected about {expected}, got {actual}"
    );
}

#[test]
fn fcfs_report_matches_hand_computed_results() {
    let report = run_simulation(&rows(), Policy::Fcfs, None).unwrap();

    assert_eq!(report.timeline.len(), 16);
    assert_eq!(report.timeline[0].as_deref(), Some("P1"));
    assert_eq!(report.timeline[5].as_deref(), Some("P2"));
    assert_eq!(report.timeline[15].as_deref(), Some("P3"));

    let finishes: Vec<u64> = report.results.iter().map(|r| r.finish).collect();
    assert_eq!(finishes, vec![5, 8, 16]);
    let turnarounds: Vec<u64> = report.results.iter().map(|r| r.turnaround).collect();
    assert_eq!(turnarounds, vec![5, 7, 14]);
    let waits: Vec<u64> = report.results.iter().map(|r| r.waiting).collect();
    assert_eq!(waits, vec![0, 4, 6]);

    approx(report.results[0].normalized_turnaround, 1.00);
    approx(report.results[1].normalized_turnaround, 2.33);
    approx(report.results[2].normalized_turnaround, 1.75);

    approx(report.averages.turnaround, 8.67);
    approx(report.averages.waiting, 3.33);
    approx(report.averages.normalized_turnaround, 1.69);
}

#[test]
fn round_robin_report_follows_queue_discipline() {
    let report = run_simulation(&rows(), Policy::RoundRobin, Some(2)).unwrap();

    let timeline: Vec<&str> = report
        .timeline
        .iter()
        .map(|slot| slot.as_deref().unwrap())
        .collect();
    assert_eq!(
        timeline,
        vec![
            "P1", "P1", "P2", "P2", "P3", "P3", "P1", "P1", "P2", "P3", "P3", "P1", "P3", "P3",
            "P3", "P3",
        ]
    );
}

#[test]
fn round_robin_without_quantum_is_an_error() {
    assert_eq!(
        run_simulation(&rows(), Policy::RoundRobin, None),
        Err(SimulationError::Scheduler(SchedulerError::MissingQuantum))
    );
    assert_eq!(
        run_simulation(&rows(), Policy::RoundRobin, Some(0)),
        Err(SimulationError::Scheduler(SchedulerError::InvalidQuantum(
            0
        )))
    );
}

#[test]
fn malformed_row_aborts_before_any_run() {
    let bad = vec![ProcessRow::new("P1", -1, 5, 0)];
    assert_eq!(
        run_simulation(&bad, Policy::Fcfs, None),
        Err(SimulationError::Validation(
            ValidationError::InvalidArrival { row: 0, value: -1 }
        ))
    );
}

#[test]
fn empty_process_set_yields_empty_report() {
    let report = run_simulation(&[], Policy::Srt, None).unwrap();
    assert!(report.timeline.is_empty());
    assert!(report.results.is_empty());
    assert_eq!(report.averages.turnaround, 0.0);
    assert_eq!(report.averages.waiting, 0.0);
    assert_eq!(report.averages.normalized_turnaround, 0.0);
}

#[test]
fn simulation_report_round_trips_through_json() {
    let report = run_simulation(&rows(), Policy::Hrrn, None).unwrap();
    let encoded = serde_json::to_string(&report).unwrap();
    let decoded: SimulationReport = serde_json::from_str(&encoded).unwrap();
    assert_eq!(report, decoded);
}

#[test]
fn policy_names_deserialize_from_snake_case() {
    let policy: Policy = serde_json::from_str("\"priority_non_preemptive\"").unwrap();
    assert_eq!(policy, Policy::PriorityNonPreemptive);
    let policy: Policy = serde_json::from_str("\"round_robin\"").unwrap();
    assert_eq!(policy, Policy::RoundRobin);
}

#[test]
fn deadlock_contract_reports_safe_sequence() {
    let report = check_deadlock(
        vec![vec![0], vec![4], vec![1]],
        vec![vec![5], vec![4], vec![4]],
        vec![4],
    )
    .unwrap();

    assert!(report.safe);
    assert_eq!(report.sequence, vec![1, 2, 0]);
}

#[test]
fn deadlock_contract_reports_unsafe_with_partial_sequence() {
    let report = check_deadlock(
        vec![vec![1], vec![1], vec![0]],
        vec![vec![1], vec![3], vec![2]],
        vec![0],
    )
    .unwrap();

    assert!(!report.safe);
    assert_eq!(report.sequence, vec![0]);
}

#[test]
fn deadlock_contract_rejects_inconsistent_cells() {
    assert_eq!(
        check_deadlock(vec![vec![2]], vec![vec![1]], vec![0]),
        Err(SafetyError::AllocationExceedsMax {
            process: 0,
            resource: 0,
            allocated: 2,
            max_demand: 1
        })
    );
}
