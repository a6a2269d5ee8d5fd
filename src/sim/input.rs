//! Readers for job lists.
//!
//! The integer stream is `n`, then `quantum` when the caller asks for one,
//! then `n` records of `id arrival burst priority`, whitespace separated.
//! The JSON form is `{"processes": [{id, arrival, burst, priority?}], "quantum"?}`.

use std::{fmt, str::FromStr};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::job::Job;
use crate::config::IDLE_PID;
use crate::core::Ticks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub jobs: Vec<Job>,
    pub quantum: Option<Ticks>,
}

#[derive(Debug)]
pub enum InputError {
    Empty,
    Truncated { field: &'static str, record: usize },
    BadToken { field: &'static str, token: String },
    ZeroBurst { id: i64 },
    ZeroQuantum,
    DuplicateId { id: i64 },
    // Collides with the idle marker in the timeline
    ReservedId { id: i64 },
    Json(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::Truncated { field, record } => {
                write!(f, "input ended while reading {field} of record {record}")
            }
            Self::BadToken { field, token } => write!(f, "invalid {field}: {token:?}"),
            Self::ZeroBurst { id } => write!(f, "process {id} has a zero burst"),
            Self::ZeroQuantum => write!(f, "quantum must be greater than 0"),
            Self::DuplicateId { id } => write!(f, "process id {id} appears more than once"),
            Self::ReservedId { id } => write!(f, "process id {id} is reserved for idle time"),
            Self::Json(err) => write!(f, "malformed JSON input: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    record: usize,
}

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let token = self.inner.next().ok_or(InputError::Truncated {
            field,
            record: self.record,
        })?;
        token.parse().map_err(|_| InputError::BadToken {
            field,
            token: token.to_string(),
        })
    }
}

pub fn parse_ints(text: &str, with_quantum: bool) -> Result<Workload, InputError> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
        record: 0,
    };
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let n: usize = tokens.next("process count")?;
    let quantum = if with_quantum {
        Some(tokens.next("quantum")?)
    } else {
        None
    };

    let mut jobs = Vec::with_capacity(n);
    for record in 1..=n {
        tokens.record = record;
        jobs.push(Job {
            id: tokens.next("id")?,
            arrival: tokens.next("arrival")?,
            burst: tokens.next("burst")?,
            priority: tokens.next("priority")?,
        });
    }

    let workload = Workload { jobs, quantum };
    validate(&workload)?;
    Ok(workload)
}

#[derive(Deserialize)]
struct JsonInput {
    processes: Vec<Job>,
    #[serde(default)]
    quantum: Option<Ticks>,
}

pub fn parse_json(text: &str) -> Result<Workload, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let input: JsonInput = serde_json::from_str(text)?;
    let workload = Workload {
        jobs: input.processes,
        quantum: input.quantum,
    };
    validate(&workload)?;
    Ok(workload)
}

fn validate(workload: &Workload) -> Result<(), InputError> {
    if workload.quantum == Some(0) {
        return Err(InputError::ZeroQuantum);
    }

    let mut seen = FxHashSet::default();
    for job in &workload.jobs {
        if job.id == IDLE_PID {
            return Err(InputError::ReservedId { id: job.id });
        }
        if job.burst == 0 {
            return Err(InputError::ZeroBurst { id: job.id });
        }
        if !seen.insert(job.id) {
            return Err(InputError::DuplicateId { id: job.id });
        }
    }
    Ok(())
}
