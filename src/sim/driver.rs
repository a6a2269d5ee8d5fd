use log::{debug, info};

use super::{job::Job, report::Report};
use crate::{
    core::{Process, SchedCore, SimCtx, SimError, SimEvent},
    scheduler::{
        FcfsScheduler, Policy, PriorityScheduler, RoundRobinScheduler, Scheduler, SjfScheduler,
    },
};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
}

impl<S: Scheduler> Sim<S> {
    /// Build a run over `jobs` in input order; `scheduler` sees the fresh process table.
    pub fn new(jobs: &[Job], scheduler: impl FnOnce(&[Process]) -> S) -> Self {
        let procs: Vec<Process> = jobs.iter().map(Process::from).collect();
        let scheduler = scheduler(&procs);
        Self {
            core: SchedCore::new(procs, scheduler),
        }
    }

    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        self.core.step()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn run(mut self) -> Result<SimCtx, SimError> {
        self.core.run()?;
        debug!("run took {} step(s)", self.core.observer().steps());
        Ok(self.core.into_ctx())
    }
}

/// Run `jobs` to completion under `policy` and summarize the result.
pub fn simulate(jobs: &[Job], policy: Policy) -> Result<Report, SimError> {
    info!("simulating {} job(s) under {policy}", jobs.len());

    let ctx = match policy {
        Policy::Fcfs => Sim::new(jobs, FcfsScheduler::new).run()?,
        Policy::Priority => Sim::new(jobs, PriorityScheduler::new).run()?,
        Policy::Sjf => Sim::new(jobs, SjfScheduler::new).run()?,
        Policy::RoundRobin { quantum } => {
            Sim::new(jobs, |procs| RoundRobinScheduler::new(procs, quantum)).run()?
        }
    };

    let report = Report::from_ctx(&ctx, policy.quantum())?;
    info!(
        "finished at t={} with {} segment(s), avg waiting {:.2}, avg turnaround {:.2}",
        ctx.now,
        report.timeline.len(),
        report.avg_waiting,
        report.avg_turnaround
    );
    Ok(report)
}
