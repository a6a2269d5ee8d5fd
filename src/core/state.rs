use super::timeline::{Subject, Timeline};

// Index into the process Vec
pub type ProcIndex = usize;
// Externally supplied process id
pub type ProcId = i64;
pub type Ticks = u64;
pub type Priority = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcId,
    pub arrival: Ticks,
    pub burst: Ticks,
    // Lower value wins; only read by the priority policy
    pub priority: Priority,
    pub remaining: Ticks,
    pub start: Option<Ticks>,
    pub completion: Option<Ticks>,
}

impl Process {
    pub fn new(id: ProcId, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
            remaining: burst,
            start: None,
            completion: None,
        }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival <= now
    }

    pub fn is_completed(&self) -> bool {
        self.remaining == 0
    }

    /// Eligible to run at `now`: arrived and still owes CPU time.
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.has_arrived(now) && !self.is_completed()
    }

    pub fn turnaround(&self) -> Option<Ticks> {
        self.completion.map(|c| c - self.arrival)
    }

    pub fn waiting(&self) -> Option<Ticks> {
        self.turnaround().map(|t| t - self.burst)
    }
}

/// Everything a run mutates: the clock, the process table and the timeline.
#[derive(Debug, Clone)]
pub struct SimCtx {
    pub now: Ticks,
    pub completed: usize,
    pub procs: Vec<Process>,
    pub timeline: Timeline,
}

impl SimCtx {
    pub fn new(procs: Vec<Process>) -> Self {
        Self {
            now: 0,
            completed: 0,
            procs,
            timeline: Timeline::new(),
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.procs.len()
    }

    pub fn proc(&self, index: ProcIndex) -> &Process {
        &self.procs[index]
    }

    pub fn pending(&self) -> usize {
        self.procs.len() - self.completed
    }

    /// Charge `run` ticks to `index` starting at the current instant.
    /// Returns true if the process finished.
    pub fn run_proc(&mut self, index: ProcIndex, run: Ticks) -> bool {
        let begin = self.now;
        let proc = &mut self.procs[index];
        debug_assert!(
            run > 0 && run <= proc.remaining,
            "Run of {run} ticks invalid for process {} with {} remaining",
            proc.id,
            proc.remaining
        );

        proc.start.get_or_insert(begin);
        proc.remaining -= run;
        let subject = Subject::Process(proc.id);
        let finished = proc.remaining == 0;

        self.advance_time(run);
        self.timeline.record(subject, begin, run);

        if finished {
            self.procs[index].completion = Some(self.now);
            self.completed += 1;
        }
        finished
    }

    /// Leave the CPU idle until `until`, which must lie in the future.
    pub fn idle_until(&mut self, until: Ticks) {
        debug_assert!(until > self.now, "Idle gap must move time forward");
        let begin = self.now;
        self.timeline.record(Subject::Idle, begin, until - begin);
        self.now = until;
    }

    // Back-fill start for anything that never ran
    pub fn finish(&mut self) {
        for proc in &mut self.procs {
            proc.start.get_or_insert(proc.arrival);
        }
    }
}
