pub mod driver;
pub mod input;
pub mod job;
pub mod render;
pub mod report;
pub mod workload;

pub use driver::{Sim, simulate};
pub use input::{InputError, Workload, parse_ints, parse_json};
pub use job::{Job, JobId};
pub use render::render_text;
pub use report::{ProcessReport, Report};
pub use workload::{BernoulliParams, bernoulli_jobs};
