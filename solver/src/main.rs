use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use flowsat::{Board, SatEngine, VarisatEngine};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "flowsat")]
#[command(about = "Solve Flow Free boards by reduction to SAT")]
#[command(version)]
struct Cli {
    /// Board file, one row per line; read from standard input when omitted
    input: Option<PathBuf>,

    /// Most verbose log level to print
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print variable and clause counts and the time spent
    #[arg(long)]
    stats: bool,
}

fn read_board(input: Option<&Path>) -> Result<Board> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open input file {}", path.display()))?;
            Board::parse(BufReader::new(file))
                .with_context(|| format!("could not read board from {}", path.display()))
        }
        None => {
            println!("Input board below:");
            Board::parse(io::stdin().lock())
                .context("could not read board from standard input")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let board = read_board(cli.input.as_deref())?;
    info!("read {0}x{0} board with {1} colors", board.side(), board.num_colors());

    let time_total = Instant::now();
    let mut engine = VarisatEngine::new();
    let solution = board.solve_with(&mut engine)?;
    let elapsed = time_total.elapsed();

    match solution {
        Some(solution) => {
            println!("Solved!");
            print!("{}", solution);
        }
        None => println!("Board is not solvable"),
    }

    if cli.stats {
        println!("variables: {}", engine.num_variables());
        println!("clauses: {}", engine.num_clauses());
        println!("time: {:.3?}", elapsed);
    }

    Ok(())
}
