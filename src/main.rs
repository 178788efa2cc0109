use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use aoc2025::{day07, run};

#[derive(Debug, Parser)]
#[command(name = "aoc2025", about = "Advent of Code 2025 solutions")]
struct Args {
    /// The day to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// The part to run, both if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Read inputs/dayNtestM.in instead of inputs/dayN.in
    #[arg(short, long)]
    test: Option<u32>,

    /// Input file path, overrides the dayN.in naming
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log every step of the day 7 traversals
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_filter = if args.trace {"trace"} else {"info"};
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let path = args.input.clone().unwrap_or_else(|| match args.test {
        Some(test) => PathBuf::from(format!("inputs/day{}test{}.in", args.day, test)),
        None => PathBuf::from(format!("inputs/day{}.in", args.day)),
    });
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let parts = match args.part {Some(part) => vec![part], None => vec![1, 2]};
    for part in parts {
        let time = Instant::now();
        let answer = if args.day == 7 && args.trace {
            day07::solve_observed(part, &input, &mut day07::TraceObserver)
        } else {
            run(args.day, part, &input)
        };
        let answer = answer.with_context(|| format!("day {} part {}", args.day, part))?;
        println!("{}", answer);
        info!("day {} part {}: {} seconds elapsed", args.day, part, time.elapsed().as_secs_f32());
    }
    Ok(())
}
