use log::{debug, trace};

use super::{
    error::SimError,
    event::SimEvent,
    observer::Observer,
    state::{Process, SimCtx, Ticks},
};
use crate::scheduler::{Dispatch, Scheduler};

/// The discrete-time engine. One instance drives one run.
pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(procs: Vec<Process>, scheduler: S) -> Self {
        Self::with_ctx(SimCtx::new(procs), scheduler)
    }

    pub fn with_ctx(ctx: SimCtx, scheduler: S) -> Self {
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
        }
    }

    /// Make one scheduling decision and apply it.
    ///
    /// Either a process runs for the length the scheduler asked for, or the
    /// CPU idles until the scheduler's next wakeup. Calling this once every
    /// process has completed is a no-op.
    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        if self.ctx.all_completed() {
            return Ok(Vec::new());
        }

        let now = self.ctx.now;
        let mut events = Vec::new();

        match self.scheduler.select(&self.ctx.procs, now) {
            Some(dispatch) => {
                self.check_dispatch(dispatch)?;
                let Dispatch { index, run } = dispatch;
                let pid = self.ctx.proc(index).id;

                trace!("t={now} run pid={pid} for {run}");
                events.push(SimEvent::Dispatched {
                    pid,
                    start: now,
                    run,
                });

                let finished = self.ctx.run_proc(index, run);
                self.scheduler.stopping(&self.ctx.procs, index);

                if finished {
                    let at = self.ctx.now;
                    debug!("t={at} pid={pid} completed");
                    events.push(SimEvent::Completed { pid, at });
                }
            }
            None => {
                let until = self
                    .scheduler
                    .idle_until(&self.ctx.procs, now)
                    .filter(|&t| t > now)
                    .ok_or(SimError::Stalled {
                        now,
                        pending: self.ctx.pending(),
                    })?;

                debug!("t={now} cpu idle until {until}");
                self.ctx.idle_until(until);
                events.push(SimEvent::Idle { from: now, until });
            }
        }

        self.observer.observe(&self.ctx);
        Ok(events)
    }

    /// Step until every process has completed.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.ctx.all_completed() {
            self.step()?;
        }
        self.ctx.finish();
        Ok(())
    }

    fn check_dispatch(&self, dispatch: Dispatch) -> Result<(), SimError> {
        let now = self.ctx.now;
        let invalid = SimError::InvalidDispatch {
            index: dispatch.index,
            run: dispatch.run,
            now,
        };
        let proc = self.ctx.procs.get(dispatch.index).ok_or(invalid.clone())?;
        if dispatch.run == 0 || dispatch.run > proc.remaining || !proc.has_arrived(now) {
            return Err(invalid);
        }
        Ok(())
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn into_ctx(self) -> SimCtx {
        self.ctx
    }
}
