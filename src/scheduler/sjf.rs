use keyed_priority_queue::KeyedPriorityQueue;

use super::{ArrivalGate, Dispatch, MinKey, Scheduler, TICK};
use crate::core::{ProcIndex, Process, Ticks};

// Shortest remaining first; equal remaining goes to the earlier input index
type SrtKey = MinKey<(Ticks, ProcIndex)>;

/// Preemptive shortest-remaining-time scheduling, re-evaluated every tick.
pub struct SjfScheduler {
    gate: ArrivalGate,
    ready: KeyedPriorityQueue<ProcIndex, SrtKey>,
}

impl SjfScheduler {
    pub fn new(procs: &[Process]) -> Self {
        Self {
            gate: ArrivalGate::new(procs),
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn key(procs: &[Process], index: ProcIndex) -> SrtKey {
        MinKey((procs[index].remaining, index))
    }
}

impl Scheduler for SjfScheduler {
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
        } else {
            // Remaining shrank; re-key so the heap stays ordered
            let rekeyed = self.ready.set_priority(&index, Self::key(procs, index));
            debug_assert!(rekeyed.is_ok(), "Running process {index} missing from ready queue");
        }
    }
}
