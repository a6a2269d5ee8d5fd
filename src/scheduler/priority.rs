use keyed_priority_queue::KeyedPriorityQueue;

use super::{ArrivalGate, Dispatch, MinKey, Scheduler, TICK};
use crate::core::{Priority, ProcId, ProcIndex, Process, Ticks};

// Lowest priority value first, then earlier arrival, then lower id
type PrioKey = MinKey<(Priority, Ticks, ProcId, ProcIndex)>;

/// Preemptive static-priority scheduling, re-evaluated every tick.
pub struct PriorityScheduler {
    gate: ArrivalGate,
    ready: KeyedPriorityQueue<ProcIndex, PrioKey>,
}

impl PriorityScheduler {
    pub fn new(procs: &[Process]) -> Self {
        Self {
            gate: ArrivalGate::new(procs),
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn key(procs: &[Process], index: ProcIndex) -> PrioKey {
        let p = &procs[index];
        MinKey((p.priority, p.arrival, p.id, index))
    }
}

impl Scheduler for PriorityScheduler {
    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<Dispatch> {
        for &index in self.gate.admit(procs, now) {
            self.ready.push(index, Self::key(procs, index));
        }

        let (&index, _) = self.ready.peek()?;
        Some(Dispatch {
            index,
            run: TICK.min(procs[index].remaining),
        })
    }

    fn stopping(&mut self, procs: &[Process], index: ProcIndex) {
        if procs[index].is_completed() {
            self.ready.remove(&index);
        }
    }
}
