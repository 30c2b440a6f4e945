use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use structureseedcracker::error::AppError;
use structureseedcracker::parser;
use structureseedcracker::strategy;

const OUTPUT_BUFFER_CAPACITY: usize = 20_000_000;

#[derive(Parser, Debug)]
#[command(name = "structureseedcracker", about = "Recovers Minecraft structure seeds from observed structures")]
struct Cli {
    /// Path to the constraints file.
    constraints_file: PathBuf,
}

fn run() -> Result<(), AppError> {
    let cli = Cli::try_parse().map_err(|_| AppError::ArgMissing)?;

    let text = fs::read_to_string(&cli.constraints_file)
        .map_err(|_| AppError::FileUnreadable(cli.constraints_file.display().to_string()))?;

    let outcome = parser::parse(&text);
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    if outcome.constraints.is_empty() && outcome.pillar_seed.is_none() {
        return Err(AppError::NoInput);
    }

    println!(
        "parsed {} constraint(s), pillar seed: {}",
        outcome.constraints.len(),
        outcome
            .pillar_seed
            .map(|p| p.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    let started = Instant::now();
    let mut found = strategy::run(&outcome.constraints, outcome.pillar_seed)?;

    if found.len() > OUTPUT_BUFFER_CAPACITY {
        eprintln!(
            "warning: {}",
            AppError::BufferOverflow {
                found: found.len(),
                capacity: OUTPUT_BUFFER_CAPACITY,
            }
        );
        found.truncate(OUTPUT_BUFFER_CAPACITY);
    }

    let body: String = found.iter().map(|s| format!("{s}\n")).collect();
    fs::write("found_seeds.txt", body).map_err(|_| AppError::FileUnreadable("found_seeds.txt".to_string()))?;

    println!("found {} seed(s)", found.len());
    println!("elapsed: {:.3}s", started.elapsed().as_secs_f64());

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code().unwrap_or(0) as u8)
        }
    }
}
