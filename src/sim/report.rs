use average::{Estimate, Mean};
use serde::Serialize;

use crate::core::{Priority, ProcId, Segment, SimCtx, SimError, Subject, Ticks};

/// Per-process row of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    pub id: ProcId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub start: Ticks,
    pub completion: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

/// Result of one run: processes in input order, compacted timeline, averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub processes: Vec<ProcessReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub timeline: Vec<Segment>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl Report {
    pub fn from_ctx(ctx: &SimCtx, quantum: Option<Ticks>) -> Result<Self, SimError> {
        let processes = ctx
            .procs
            .iter()
            .map(|p| -> Result<ProcessReport, SimError> {
                let incomplete = SimError::Incomplete { pid: p.id };
                let completion = p.completion.ok_or(incomplete.clone())?;
                let turnaround = p.turnaround().ok_or(incomplete.clone())?;
                let waiting = p.waiting().ok_or(incomplete)?;
                Ok(ProcessReport {
                    id: p.id,
                    arrival: p.arrival,
                    burst: p.burst,
                    priority: p.priority,
                    start: p.start.unwrap_or(p.arrival),
                    completion,
                    waiting,
                    turnaround,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let avg_waiting = avg(processes.iter().map(|p| p.waiting as f64));
        let avg_turnaround = avg(processes.iter().map(|p| p.turnaround as f64));

        Ok(Self {
            processes,
            quantum,
            timeline: ctx.timeline.segments().to_vec(),
            avg_waiting,
            avg_turnaround,
        })
    }

    /// Instant the last segment ends.
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, |s| s.end)
    }

    /// Fraction of the timeline spent running processes.
    pub fn utilization(&self) -> f64 {
        let span: Ticks = self.timeline.iter().map(Segment::duration).sum();
        if span == 0 {
            return 0.0;
        }
        let idle: Ticks = self
            .timeline
            .iter()
            .filter(|s| s.subject == Subject::Idle)
            .map(Segment::duration)
            .sum();
        (span - idle) as f64 / span as f64
    }
}

// Mean rounded to two decimals; zero for an empty set
fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    let mean: Mean = iter.collect();
    if mean.is_empty() {
        return 0.0;
    }
    round2(mean.estimate())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
