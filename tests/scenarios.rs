//! End-to-end runs with hand-checked timelines and metrics.

use sched_model::{Job, Policy, Report, config::IDLE_PID, simulate};

fn spans(report: &Report) -> Vec<(i64, u64, u64)> {
    report
        .timeline
        .iter()
        .map(|s| (s.subject.pid(), s.start, s.end))
        .collect()
}

fn metrics(report: &Report, id: i64) -> (u64, u64, u64, u64) {
    let p = report
        .processes
        .iter()
        .find(|p| p.id == id)
        .expect("process missing from report");
    (p.start, p.completion, p.turnaround, p.waiting)
}

#[test]
fn priority_preempts_on_arrival() {
    let jobs = vec![Job::new(1, 0, 5, 2), Job::new(2, 1, 3, 1)];
    let report = simulate(&jobs, Policy::Priority).unwrap();

    assert_eq!(spans(&report), vec![(1, 0, 1), (2, 1, 4), (1, 4, 8)]);
    assert_eq!(metrics(&report, 1), (0, 8, 8, 3));
    assert_eq!(metrics(&report, 2), (1, 4, 3, 0));
    assert_eq!(report.avg_waiting, 1.5);
    assert_eq!(report.avg_turnaround, 5.5);
}

#[test]
fn round_robin_alternates_by_quantum() {
    let jobs = vec![Job::new(1, 0, 4, 1), Job::new(2, 0, 2, 1)];
    let report = simulate(&jobs, Policy::RoundRobin { quantum: 2 }).unwrap();

    assert_eq!(spans(&report), vec![(1, 0, 2), (2, 2, 4), (1, 4, 6)]);
    assert_eq!(metrics(&report, 2), (2, 4, 4, 2));
    assert_eq!(metrics(&report, 1), (0, 6, 6, 2));
    assert_eq!(report.quantum, Some(2));
}

#[test]
fn sjf_runs_shortest_remaining() {
    let jobs = vec![
        Job::new(1, 0, 8, 0),
        Job::new(2, 1, 4, 0),
        Job::new(3, 2, 9, 0),
        Job::new(4, 3, 5, 0),
    ];
    let report = simulate(&jobs, Policy::Sjf).unwrap();

    assert_eq!(
        spans(&report),
        vec![(1, 0, 1), (2, 1, 5), (4, 5, 10), (1, 10, 17), (3, 17, 26)]
    );
    let waits: Vec<_> = report.processes.iter().map(|p| p.waiting).collect();
    assert_eq!(waits, vec![9, 0, 15, 2]);
    assert_eq!(report.avg_waiting, 6.5);
}

#[test]
fn sjf_tie_goes_to_earlier_input_record() {
    let jobs = vec![Job::new(5, 0, 2, 0), Job::new(3, 0, 2, 0)];
    let report = simulate(&jobs, Policy::Sjf).unwrap();
    assert_eq!(spans(&report), vec![(5, 0, 2), (3, 2, 4)]);
}

#[test]
fn leading_gap_is_idle() {
    let jobs = vec![Job::new(1, 2, 2, 1)];
    for policy in [
        Policy::Priority,
        Policy::Sjf,
        Policy::Fcfs,
        Policy::RoundRobin { quantum: 3 },
    ] {
        let report = simulate(&jobs, policy).unwrap();
        assert_eq!(spans(&report), vec![(IDLE_PID, 0, 2), (1, 2, 4)], "{policy}");
        assert_eq!(metrics(&report, 1), (2, 4, 2, 0));
    }
}

#[test]
fn gap_between_bursts_is_idle() {
    let jobs = vec![Job::new(1, 0, 1, 1), Job::new(2, 4, 1, 1)];
    let report = simulate(&jobs, Policy::Priority).unwrap();
    assert_eq!(spans(&report), vec![(1, 0, 1), (IDLE_PID, 1, 4), (2, 4, 5)]);
}

#[test]
fn round_robin_waits_for_the_next_turn() {
    // Process 1 is ready at t=2, but process 2 holds the turn until it arrives
    let jobs = vec![Job::new(1, 0, 4, 1), Job::new(2, 10, 1, 1)];
    let report = simulate(&jobs, Policy::RoundRobin { quantum: 2 }).unwrap();

    assert_eq!(
        spans(&report),
        vec![(1, 0, 2), (IDLE_PID, 2, 10), (2, 10, 11), (1, 11, 13)]
    );
    assert_eq!(metrics(&report, 1), (0, 13, 13, 9));
    assert_eq!(metrics(&report, 2), (10, 11, 1, 0));
}

#[test]
fn fcfs_runs_each_job_to_completion() {
    let jobs = vec![Job::new(1, 0, 3, 9), Job::new(3, 1, 1, 0), Job::new(2, 1, 2, 0)];
    let report = simulate(&jobs, Policy::Fcfs).unwrap();
    assert_eq!(spans(&report), vec![(1, 0, 3), (2, 3, 5), (3, 5, 6)]);
}

#[test]
fn processes_are_reported_in_input_order() {
    let jobs = vec![Job::new(9, 3, 1, 0), Job::new(4, 0, 2, 0)];
    let report = simulate(&jobs, Policy::Priority).unwrap();
    let ids: Vec<_> = report.processes.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![9, 4]);
}

#[test]
fn document_shape() {
    let jobs = vec![Job::new(1, 0, 4, 1), Job::new(2, 0, 2, 1)];
    let report = simulate(&jobs, Policy::RoundRobin { quantum: 2 }).unwrap();
    let doc = serde_json::to_value(&report).unwrap();

    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    for key in ["processes", "quantum", "timeline", "avgWaiting", "avgTurnaround"] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }

    let first = &doc["processes"][0];
    for key in [
        "id",
        "arrival",
        "burst",
        "priority",
        "start",
        "completion",
        "waiting",
        "turnaround",
    ] {
        assert!(first.get(key).is_some(), "process row missing {key}");
    }
    assert_eq!(doc["quantum"], 2);
    assert_eq!(doc["timeline"][0]["pid"], 1);
    assert_eq!(doc["timeline"][2]["end"], 6);
    assert_eq!(doc["avgWaiting"], 2.0);

    let priority = serde_json::to_value(simulate(&jobs, Policy::Priority).unwrap()).unwrap();
    assert!(priority.get("quantum").is_none());
}
