pub mod fcfs;
pub mod priority;
pub mod rr;
pub mod sjf;

use std::{cmp::Ordering, fmt};

use crate::core::{Process, ProcIndex, Ticks};
pub use fcfs::FcfsScheduler;
pub use priority::PriorityScheduler;
pub use rr::RoundRobinScheduler;
pub use sjf::SjfScheduler;

// Priority/SJF re-decide every tick
pub const TICK: Ticks = 1;

/// Run `procs[index]` for `run` ticks starting now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub index: ProcIndex,
    pub run: Ticks,
}

pub trait Scheduler {
    /// Pick the process to run at `now`, or `None` to leave the CPU idle.
    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<Dispatch>;

    // Called after every run with the already-charged process table
    fn stopping(&mut self, _procs: &[Process], _index: ProcIndex) {}

    /// Where the clock should jump when `select` declines to run anything.
    fn idle_until(&self, procs: &[Process], _now: Ticks) -> Option<Ticks> {
        procs
            .iter()
            .filter(|p| !p.is_completed())
            .map(|p| p.arrival)
            .min()
    }
}

/// Scheduling policy chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Priority,
    Sjf,
    RoundRobin { quantum: Ticks },
}

impl Policy {
    pub fn quantum(&self) -> Option<Ticks> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Priority => write!(f, "Priority"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {quantum})"),
        }
    }
}

/// Indices sorted by `(arrival, id)`, admitted as the clock passes them.
#[derive(Debug, Clone)]
pub struct ArrivalGate {
    order: Vec<ProcIndex>,
    cursor: usize,
}

impl ArrivalGate {
    pub fn new(procs: &[Process]) -> Self {
        Self {
            order: arrival_order(procs),
            cursor: 0,
        }
    }

    /// Indices that arrived since the last call.
    pub fn admit(&mut self, procs: &[Process], now: Ticks) -> &[ProcIndex] {
        let from = self.cursor;
        while self
            .order
            .get(self.cursor)
            .is_some_and(|&i| procs[i].has_arrived(now))
        {
            self.cursor += 1;
        }
        &self.order[from..self.cursor]
    }
}

pub fn arrival_order(procs: &[Process]) -> Vec<ProcIndex> {
    let mut order: Vec<ProcIndex> = (0..procs.len()).collect();
    order.sort_by(|&a, &b| {
        procs[a]
            .arrival
            .cmp(&procs[b].arrival)
            .then_with(|| procs[a].id.cmp(&procs[b].id))
    });
    order
}

// KeyedPriorityQueue is a max-heap, so flip the key's Ord to pop the minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinKey<K>(pub K);

impl<K: Ord> PartialOrd for MinKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for MinKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}
