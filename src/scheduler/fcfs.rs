use std::collections::VecDeque;

use super::{ArrivalGate, Dispatch, Scheduler};
use crate::core::{ProcIndex, Process, Ticks};

/// Non-preemptive first-come first-served: the head of the queue runs to completion.
pub struct FcfsScheduler {
    gate: ArrivalGate,
    ready: VecDeque<ProcIndex>,
}

impl FcfsScheduler {
    pub fn new(procs: &[Process]) -> Self {
        Self {
            gate: ArrivalGate::new(procs),
            ready: VecDeque::new(),
        }
    }
}

impl Scheduler for FcfsScheduler {
    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<Dispatch> {
        self.ready.extend(self.gate.admit(procs, now));

        let &index = self.ready.front()?;
        Some(Dispatch {
            index,
            run: procs[index].remaining,
        })
    }

    fn stopping(&mut self, procs: &[Process], index: ProcIndex) {
        if procs[index].is_completed() && self.ready.front() == Some(&index) {
            self.ready.pop_front();
        }
    }
}
