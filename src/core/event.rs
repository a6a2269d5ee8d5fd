use crate::core::{ProcId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Dispatched {
        pid: ProcId,
        start: Ticks,
        run: Ticks,
    },
    // No process ready; clock jumped to `until`
    Idle {
        from: Ticks,
        until: Ticks,
    },
    Completed {
        pid: ProcId,
        at: Ticks,
    },
}
