use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use sandslabs::{
    chain::chain_total, parse::parse_bricks, settle::settle, stability::safe_count, Config, FLOOR,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Height of the ground plane
    #[arg(long, global = true, default_value_t = FLOOR, allow_negative_numbers = true)]
    floor: i32,

    /// Give up settling after this many steps
    #[arg(long, global = true)]
    step_limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve both parts of the puzzle
    Solve {
        #[arg(short, long)]
        /// Log how long settling and each part took
        timings: bool,

        /// Puzzle input, read from stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print every settled brick along with the bricks it rests on
    Settle {
        /// Puzzle input, read from stdin when omitted
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(file) => fs::read_to_string(&file)
            .with_context(|| format!("could not read file: {}", file.display())),
        None if atty::is(atty::Stream::Stdin) => {
            bail!("no input file given and nothing piped into stdin")
        }
        None => {
            let mut str = String::new();
            io::stdin()
                .read_to_string(&mut str)
                .context("could not read stdin")?;
            Ok(str)
        }
    }
}

fn time<T, F>(label: &str, enabled: bool, f: F) -> T
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let result = f();
    if enabled {
        log::info!("{label} took {:?}", t0.elapsed());
    }
    result
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config {
        floor: cli.floor,
        step_limit: cli.step_limit,
    };

    match cli.command {
        Commands::Solve { timings, file } => {
            let input = read_input(file)?;
            let bricks = parse_bricks(&input)?;
            log::info!("parsed {} bricks", bricks.len());

            let graph = time("settling", timings, || settle(&bricks, &config))?;

            let safe = time("first part", timings, || safe_count(&graph));
            println!("First part: {safe}");

            let fallen = time("bonus", timings, || chain_total(&graph));
            println!("Bonus: {fallen}");
        }
        Commands::Settle { file } => {
            let input = read_input(file)?;
            let graph = settle(&parse_bricks(&input)?, &config)?;

            for (brick, below) in graph.sorted() {
                if below.is_empty() {
                    println!("{brick} <- ground");
                } else {
                    let below = below
                        .iter()
                        .map(|b| b.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("{brick} <- {below}");
                }
            }
        }
    }

    Ok(())
}
