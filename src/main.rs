//! Headless soak runner (default binary).
//!
//! Plays a seeded game with no terminal or window attached and prints a summary.
//! Useful for checking the rules engine over long runs.

use anyhow::Result;
use log::LevelFilter;

use tetris_arena::soak::{parse_soak_args, run_soak};

fn init_logging(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_soak_args(&args)?;
    init_logging(config.log_level)?;

    let report = run_soak(&config)?;

    println!("frames:        {}", report.frames);
    println!("commands:      {}", report.commands);
    println!("pieces locked: {}", report.pieces_locked);
    println!("lines:         {}", report.lines);
    println!("games over:    {}", report.games_over);
    println!("best score:    {}", report.best_score);
    println!("final score:   {}", report.final_score);
    Ok(())
}
