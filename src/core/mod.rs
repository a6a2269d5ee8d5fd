pub mod driver;
pub mod error;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::SchedCore;
pub use error::SimError;
pub use event::SimEvent;
pub use state::{Priority, ProcId, ProcIndex, Process, SimCtx, Ticks};
pub use timeline::{Segment, Subject, Timeline};
