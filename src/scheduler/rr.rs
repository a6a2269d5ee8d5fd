use super::{Dispatch, Scheduler, arrival_order};
use crate::core::{ProcIndex, Process, Ticks};

/// Round robin over a fixed cyclic order sorted by `(arrival, id)`.
///
/// Each turn runs for at most `quantum`. When the process whose turn it is
/// has not arrived yet, the CPU idles until it does. Because the order is
/// arrival-sorted, nothing later in the pass could have run sooner.
pub struct RoundRobinScheduler {
    quantum: Ticks,
    order: Vec<ProcIndex>,
    // Position in `order` of the next turn
    cursor: usize,
}

impl RoundRobinScheduler {
    pub fn new(procs: &[Process], quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "Round robin quantum must be positive");
        Self {
            quantum,
            order: arrival_order(procs),
            cursor: 0,
        }
    }

    // Position of the next unfinished process, wrapping into the next round
    fn next_turn(&self, procs: &[Process]) -> Option<usize> {
        let len = self.order.len();
        (0..len)
            .map(|k| (self.cursor + k) % len)
            .find(|&pos| !procs[self.order[pos]].is_completed())
    }
}

impl Scheduler for RoundRobinScheduler {
    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<Dispatch> {
        let pos = self.next_turn(procs)?;
        let index = self.order[pos];
        let proc = &procs[index];
        if !proc.has_arrived(now) {
            return None;
        }

        self.cursor = (pos + 1) % self.order.len();
        Some(Dispatch {
            index,
            run: self.quantum.min(proc.remaining),
        })
    }

    fn idle_until(&self, procs: &[Process], _now: Ticks) -> Option<Ticks> {
        self.next_turn(procs).map(|pos| procs[self.order[pos]].arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_capped_by_quantum_and_remaining() {
        let procs = vec![Process::new(1, 0, 5, 0), Process::new(2, 0, 1, 0)];
        let mut s = RoundRobinScheduler::new(&procs, 2);
        assert_eq!(s.select(&procs, 0), Some(Dispatch { index: 0, run: 2 }));
        assert_eq!(s.select(&procs, 2), Some(Dispatch { index: 1, run: 1 }));
    }

    #[test]
    fn cycles_in_arrival_then_id_order() {
        let procs = vec![
            Process::new(3, 0, 9, 0),
            Process::new(1, 0, 9, 0),
            Process::new(2, 0, 9, 0),
        ];
        let mut s = RoundRobinScheduler::new(&procs, 1);
        let turns: Vec<_> = (0..6)
            .map(|t| s.select(&procs, t).map(|d| procs[d.index].id))
            .collect();
        assert_eq!(
            turns,
            vec![Some(1), Some(2), Some(3), Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn waits_for_the_process_whose_turn_it_is() {
        let procs = vec![Process::new(1, 0, 4, 0), Process::new(2, 10, 1, 0)];
        let mut s = RoundRobinScheduler::new(&procs, 2);
        assert_eq!(s.select(&procs, 0).map(|d| d.index), Some(0));
        // Process 1 is still ready, but process 2 holds the turn
        assert_eq!(s.select(&procs, 2), None);
        assert_eq!(s.idle_until(&procs, 2), Some(10));
        assert_eq!(s.select(&procs, 10).map(|d| d.index), Some(1));
    }

    #[test]
    fn skips_finished_processes() {
        let mut procs = vec![Process::new(1, 0, 1, 0), Process::new(2, 0, 3, 0)];
        procs[0].remaining = 0;
        procs[0].completion = Some(1);
        let mut s = RoundRobinScheduler::new(&procs, 2);
        assert_eq!(s.select(&procs, 1).map(|d| d.index), Some(1));
        assert_eq!(s.select(&procs, 3).map(|d| d.index), Some(1));
    }
}
