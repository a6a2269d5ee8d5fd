use std::fmt;

use super::state::{ProcId, ProcIndex, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Nothing is ready and no future arrival can unblock the run.
    Stalled { now: Ticks, pending: usize },
    /// The scheduler picked a process that cannot run for the requested time.
    InvalidDispatch {
        index: ProcIndex,
        run: Ticks,
        now: Ticks,
    },
    /// A report was requested for a process that never completed.
    Incomplete { pid: ProcId },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled { now, pending } => write!(
                f,
                "simulation stalled at t={now}: {pending} process(es) pending with no future arrival"
            ),
            Self::InvalidDispatch { index, run, now } => write!(
                f,
                "scheduler dispatched process #{index} for {run} tick(s) at t={now}, which it cannot run"
            ),
            Self::Incomplete { pid } => write!(f, "process {pid} never completed"),
        }
    }
}

impl std::error::Error for SimError {}
