use std::{
    fs,
    io::{self, Read},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn};
use sched_model::{
    Policy,
    config::DEFAULT_QUANTUM,
    core::Ticks,
    sim::{self, BernoulliParams, Workload},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Priority,
    Sjf,
    Rr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// `n [quantum]` then `id arrival burst priority` records
    Ints,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Simulate CPU scheduling and print per-process metrics and the timeline.
#[derive(Debug, Parser)]
#[command(name = "sched_model", version)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Priority)]
    policy: PolicyArg,

    /// Round robin quantum; overrides the one in the input
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    quantum: Option<Ticks>,

    /// Input file, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    #[arg(long, value_enum, default_value_t = InputFormat::Ints)]
    input_format: InputFormat,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Generate a random workload spanning TICKS instead of reading input
    #[arg(long, value_name = "TICKS")]
    generate: Option<Ticks>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let workload = load_workload(&args)?;
    let policy = match args.policy {
        PolicyArg::Fcfs => Policy::Fcfs,
        PolicyArg::Priority => Policy::Priority,
        PolicyArg::Sjf => Policy::Sjf,
        PolicyArg::Rr => Policy::RoundRobin {
            quantum: args.quantum.or(workload.quantum).unwrap_or(DEFAULT_QUANTUM),
        },
    };
    if args.quantum.is_some() && !matches!(policy, Policy::RoundRobin { .. }) {
        warn!("--quantum is ignored by {policy}");
    }

    let report = sim::simulate(&workload.jobs, policy)
        .with_context(|| format!("{policy} simulation failed"))?;

    match args.format {
        OutputFormat::Json => {
            let doc = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{doc}");
        }
        OutputFormat::Text => print!("{}", sim::render_text(&report, policy)),
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_workload(args: &Args) -> Result<Workload> {
    if let Some(ticks) = args.generate {
        let params = BernoulliParams {
            ticks,
            ..BernoulliParams::default()
        };
        let jobs = sim::bernoulli_jobs(params, args.seed);
        info!(
            "generated {} job(s) over {ticks} tick(s) with seed {}",
            jobs.len(),
            args.seed
        );
        return Ok(Workload {
            jobs,
            quantum: None,
        });
    }

    let text = read_input(&args.input)?;
    let workload = match args.input_format {
        InputFormat::Ints => sim::parse_ints(&text, args.policy == PolicyArg::Rr),
        InputFormat::Json => sim::parse_json(&text),
    }
    .with_context(|| format!("reading processes from {}", args.input))?;

    info!("read {} job(s) from {}", workload.jobs.len(), args.input);
    Ok(workload)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("opening {path}"))
    }
}
