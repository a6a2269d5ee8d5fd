use super::state::SimCtx;

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert_eq!(
            ctx.timeline.last_end().unwrap_or(0),
            ctx.now,
            "Timeline must end at the current instant (step {})",
            self.step
        );

        // Earlier segments are frozen once a later one starts; only the tail can change
        if let [.., prev, last] = ctx.timeline.segments() {
            debug_assert_eq!(
                prev.end, last.start,
                "Timeline has a gap or overlap between {prev:?} and {last:?}"
            );
            debug_assert_ne!(
                prev.subject, last.subject,
                "Adjacent segments {prev:?} and {last:?} were not merged"
            );
        }

        let mut finished = 0;
        for proc in &ctx.procs {
            let id = proc.id;
            debug_assert_eq!(
                proc.completion.is_some(),
                proc.is_completed(),
                "Process {id} completion must be set exactly when remaining hits 0"
            );
            if let Some(start) = proc.start {
                debug_assert!(
                    start >= proc.arrival,
                    "Process {id} started at {start} before arriving at {}",
                    proc.arrival
                );
            }
            if proc.is_completed() {
                finished += 1;
            }
        }
        debug_assert_eq!(
            finished, ctx.completed,
            "Completed counter disagrees with process table"
        );
    }
}
