use rand::prelude::*;

use super::job::{Job, JobId};
use crate::core::{Priority, Ticks};

#[derive(Debug, Clone, Copy)]
pub struct BernoulliParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: Ticks,
    pub long_ticks: Ticks,
    pub max_priority: Priority,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self {
            ticks: 20,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            max_priority: 5,
        }
    }
}

/// One coin flip per tick decides whether a job arrives; a second picks its burst.
pub fn bernoulli_jobs(params: BernoulliParams, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let burst = if rng.random::<f64>() < params.p_short {
                params.short_ticks
            } else {
                params.long_ticks
            };
            let priority = rng.random_range(1..=params.max_priority.max(1));

            jobs.push(Job {
                id: jobs.len() as JobId + 1,
                arrival: t,
                burst,
                priority,
            });
        }
    }

    jobs
}
