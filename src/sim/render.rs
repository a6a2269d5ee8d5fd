use super::report::Report;
use crate::core::{Subject, Ticks};
use crate::scheduler::Policy;

const COL: usize = 11;
// Gantt cells stop growing past this many ticks
const MAX_CELL_TICKS: u64 = 16;

/// Human-readable table, averages and Gantt chart for one report.
pub fn render_text(report: &Report, policy: Policy) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {policy} ===\n\n"));
    let header = [
        "PID",
        "Arrival",
        "Burst",
        "Priority",
        "Start",
        "Completion",
        "Waiting",
        "Turnaround",
    ];
    for h in header {
        out.push_str(&format!("{h:>width$}", width = COL));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", "-".repeat(COL * header.len())));

    for p in &report.processes {
        for v in [
            p.id.to_string(),
            p.arrival.to_string(),
            p.burst.to_string(),
            p.priority.to_string(),
            p.start.to_string(),
            p.completion.to_string(),
            p.waiting.to_string(),
            p.turnaround.to_string(),
        ] {
            out.push_str(&format!("{v:>width$}", width = COL));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "Average waiting time: {:.2}\n",
        report.avg_waiting
    ));
    out.push_str(&format!(
        "Average turnaround time: {:.2}\n",
        report.avg_turnaround
    ));
    out.push_str(&format!(
        "CPU utilization: {:.1}%\n",
        report.utilization() * 100.0
    ));

    if !report.timeline.is_empty() {
        out.push('\n');
        out.push_str(&gantt(report));
    }
    out
}

/// Two-line ASCII chart: labelled bars over a time axis.
pub fn gantt(report: &Report) -> String {
    let mut bar = String::from("|");
    let mut axis = String::new();

    for seg in &report.timeline {
        let label = match seg.subject {
            Subject::Idle => "idle".to_string(),
            Subject::Process(id) => format!("P{id}"),
        };
        let ticks = seg.duration().min(MAX_CELL_TICKS) as usize;
        let width = (label.len() + 2).max(ticks.saturating_mul(2));
        place(&mut axis, bar.len() - 1, seg.start);
        bar.push_str(&format!("{label:^width$}|"));
    }
    place(&mut axis, bar.len() - 1, report.makespan());

    format!("{bar}\n{axis}\n")
}

fn place(axis: &mut String, column: usize, t: Ticks) {
    if axis.len() < column {
        axis.push_str(&" ".repeat(column - axis.len()));
    } else if !axis.is_empty() {
        axis.push(' ');
    }
    axis.push_str(&t.to_string());
}
