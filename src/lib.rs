pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{SchedCore, SimError, SimEvent};
pub use scheduler::{Policy, Scheduler};
pub use sim::{Job, Report, Sim, simulate};

pub mod config {
    use crate::core::{Priority, ProcId, Ticks};

    /// Round robin quantum when neither the input nor the command line gives one.
    pub const DEFAULT_QUANTUM: Ticks = 2;

    /// Priority given to JSON records that omit it.
    pub const DEFAULT_PRIORITY: Priority = 1;

    // Timeline pid written for idle segments
    pub const IDLE_PID: ProcId = -1;
}
