//! Headless soak run: drives a session with fixed-step frames and a seeded
//! stream of commands, the way an interactive host would, and reports totals.

use std::fs;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, LevelFilter};

use crate::core::{DropOutcome, Session, SessionConfig, SimpleRng};
use crate::types::GameAction;

/// Frame length in time units (~60 FPS)
pub const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoakConfig {
    pub session: SessionConfig,
    pub frames: u32,
    /// One command every `command_every` frames on average
    pub command_every: u32,
    pub log_level: LevelFilter,
}

impl Default for SoakConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            frames: 60 * 60 * 10,
            command_every: 8,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoakReport {
    pub frames: u32,
    pub commands: u32,
    pub pieces_locked: u32,
    pub lines: u32,
    pub best_score: u32,
    pub final_score: u32,
    pub games_over: u32,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String> {
    args.get(i)
        .ok_or_else(|| anyhow!("soak: missing value for {}", flag))
}

pub fn parse_soak_args(args: &[String]) -> Result<SoakConfig> {
    let mut config = SoakConfig::default();
    let mut seed: Option<u32> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = value(args, i, "--config")?;
                let text = fs::read_to_string(path)
                    .with_context(|| format!("soak: reading {}", path))?;
                config.session = serde_json::from_str(&text)
                    .with_context(|| format!("soak: parsing {}", path))?;
            }
            "--seed" => {
                i += 1;
                let v = value(args, i, "--seed")?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("soak: invalid --seed value: {}", v))?,
                );
            }
            "--frames" => {
                i += 1;
                let v = value(args, i, "--frames")?;
                config.frames = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("soak: invalid --frames value: {}", v))?;
            }
            "--command-every" => {
                i += 1;
                let v = value(args, i, "--command-every")?;
                config.command_every = v
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| anyhow!("soak: invalid --command-every value: {}", v))?;
            }
            "--log-level" => {
                i += 1;
                let v = value(args, i, "--log-level")?;
                config.log_level = v
                    .parse::<LevelFilter>()
                    .map_err(|_| anyhow!("soak: invalid --log-level value: {}", v))?;
            }
            other => {
                return Err(anyhow!("soak: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    // --seed wins over a seed in the config file, whatever the order
    if let Some(seed) = seed {
        config.session.seed = seed;
    }

    Ok(config)
}

/// Fold the session's last landing, if any, into the report
fn record_landing(session: &mut Session, report: &mut SoakReport, frame: u32) {
    let Some(event) = session.take_last_event() else {
        return;
    };
    report.pieces_locked += 1;
    report.lines += event.lines_cleared;
    if event.lines_cleared > 0 {
        debug!(
            "soak: frame {}: {} lines for {} points",
            frame, event.lines_cleared, event.score_delta
        );
    }
}

pub fn run_soak(config: &SoakConfig) -> Result<SoakReport> {
    let mut session = Session::with_config(config.session.clone())?;
    // Commands come from their own stream so the shape sequence stays seed-stable
    let mut rng = SimpleRng::new(config.session.seed ^ 0x9E37_79B9);
    let mut report = SoakReport::default();

    info!(
        "soak: {} frames on {}x{} (seed {})",
        config.frames, config.session.width, config.session.height, config.session.seed
    );

    for frame in 0..config.frames {
        if rng.next_range(config.command_every) == 0 {
            let action = match rng.next_range(5) {
                0 => GameAction::MoveLeft,
                1 => GameAction::MoveRight,
                2 => GameAction::RotateCw,
                3 => GameAction::RotateCcw,
                _ => GameAction::SoftDrop,
            };
            session.apply_action(action);
            report.commands += 1;
            record_landing(&mut session, &mut report, frame);
        }

        if let Some(DropOutcome::GameOver) = session.tick(FRAME_MS) {
            debug!("soak: game over at frame {}", frame);
        }
        record_landing(&mut session, &mut report, frame);

        report.best_score = report.best_score.max(session.score());
        report.frames += 1;
    }

    report.final_score = session.score();
    report.games_over = session.games_over();
    Ok(report)
}
