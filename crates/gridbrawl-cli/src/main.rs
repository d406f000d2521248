//! Gridbrawl arena runner.
//!
//! # Usage
//!
//! ```bash
//! # One game with the default roster
//! gridbrawl run --seed 7
//!
//! # Board and standings before every round, plus the event stream
//! gridbrawl run --show-rounds --events
//!
//! # Setup from a file, tweaked on the command line
//! gridbrawl run --config game.json --roster sweeper,pyro,pyro
//!
//! # Win tally over 500 seeds
//! gridbrawl batch --games 500
//! ```
//!
//! Boards and results go to stdout; logs go to stderr (`RUST_LOG` or `-v`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gridbrawl_cli::roster::builtin_registry;
use gridbrawl_cli::{play, run_batch, standings, GameReport, GameSetup, RoundPhase};

#[derive(Parser)]
#[command(name = "gridbrawl")]
#[command(about = "Turn-based grid arena for autonomous agents")]
#[command(version)]
struct Cli {
    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print the final board
    Run {
        #[command(flatten)]
        setup: SetupArgs,

        /// Print the board and every agent's stats before each round
        #[arg(long)]
        show_rounds: bool,

        /// Print each round's events as JSON lines
        #[arg(long)]
        events: bool,

        /// Print the final report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play many seeds in parallel and tally winners
    Batch {
        #[command(flatten)]
        setup: SetupArgs,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,
    },

    /// List the available strategies
    Roster,
}

/// Setup flags shared by `run` and `batch`; each overrides the config file.
#[derive(Args, Default)]
struct SetupArgs {
    /// JSON setup file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board rows (at least 10)
    #[arg(long)]
    height: Option<usize>,

    /// Board columns (at least 10)
    #[arg(long)]
    width: Option<usize>,

    /// Hazards to scatter
    #[arg(long)]
    obstacles: Option<usize>,

    /// Round cap
    #[arg(long)]
    rounds: Option<u64>,

    /// Game seed (first seed for batch)
    #[arg(long)]
    seed: Option<u64>,

    /// Strategy names, comma separated
    #[arg(long, value_delimiter = ',')]
    roster: Option<Vec<String>>,
}

impl SetupArgs {
    fn resolve(self) -> Result<GameSetup> {
        let mut setup = match &self.config {
            Some(path) => GameSetup::load(path)
                .with_context(|| format!("loading setup from {}", path.display()))?,
            None => GameSetup::default(),
        };
        if let Some(height) = self.height {
            setup.height = height;
        }
        if let Some(width) = self.width {
            setup.width = width;
        }
        if let Some(obstacles) = self.obstacles {
            setup.obstacles = obstacles;
        }
        if let Some(rounds) = self.rounds {
            setup.max_rounds = rounds;
        }
        if let Some(seed) = self.seed {
            setup.seed = seed;
        }
        if let Some(roster) = self.roster {
            setup.roster = roster;
        }
        Ok(setup)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries boards and reports; logs go to stderr.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Run {
            setup,
            show_rounds,
            events,
            json,
        }) => cmd_run(&setup.resolve()?, show_rounds, events, json),
        Some(Commands::Batch { setup, games }) => cmd_batch(&setup.resolve()?, games),
        Some(Commands::Roster) => cmd_roster(),
        None => cmd_run(&GameSetup::default(), false, false, false),
    }
}

fn cmd_run(setup: &GameSetup, show_rounds: bool, events: bool, json: bool) -> Result<()> {
    let registry = builtin_registry();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_failed = None;

    let report = play(setup, &registry, |phase, arena| {
        if phase == RoundPhase::Finished {
            tracing::info!(round = arena.round(), alive = arena.alive_count(), "round");
        }
        if write_failed.is_some() {
            return;
        }
        let result = (|| -> io::Result<()> {
            match phase {
                RoundPhase::Starting if show_rounds => {
                    let round = arena.round() + 1;
                    writeln!(out, "=========== starting round {round} ===========")?;
                    writeln!(out)?;
                    arena.print_state(&mut out)?;
                    writeln!(out)?;
                    for standing in standings(arena, &setup.roster) {
                        writeln!(out, "{standing}")?;
                        writeln!(out)?;
                    }
                }
                RoundPhase::Finished if events => {
                    for event in arena.events() {
                        let line = serde_json::to_string(event).map_err(io::Error::other)?;
                        writeln!(out, "{line}")?;
                    }
                }
                _ => {}
            }
            Ok(())
        })();
        if let Err(err) = result {
            write_failed = Some(err);
        }
    })
    .context("starting game")?;

    if let Some(err) = write_failed {
        return Err(err).context("writing round output");
    }
    if json {
        serde_json::to_writer_pretty(&mut out, &report).context("writing report")?;
        writeln!(out)?;
    } else {
        print_report(&mut out, &report).context("writing report")?;
    }
    Ok(())
}

fn print_report<W: Write>(out: &mut W, report: &GameReport) -> io::Result<()> {
    writeln!(out, "=========== game over ===========")?;
    writeln!(out)?;
    write!(out, "{}", report.board)?;
    writeln!(out)?;
    for standing in &report.standings {
        writeln!(out, "{standing}")?;
    }
    writeln!(out, "Winner: {}", report.winner_name())
}

fn cmd_batch(setup: &GameSetup, games: u32) -> Result<()> {
    let registry = builtin_registry();
    let summary = run_batch(setup, &registry, games).context("running batch")?;

    let mut out = io::stdout().lock();
    writeln!(out, "games: {}", summary.games)?;
    for (kind, wins) in &summary.wins {
        writeln!(
            out,
            "{kind:>10}: {wins:>5} ({:.1}%)",
            summary.win_rate(kind) * 100.0
        )?;
    }
    writeln!(out, "{:>10}: {:>5}", "draws", summary.draws)?;
    writeln!(out, "mean rounds: {:.1}", summary.mean_rounds)?;
    Ok(())
}

fn cmd_roster() -> Result<()> {
    let registry = builtin_registry();
    let mut out = io::stdout().lock();
    for (name, description) in registry.kinds() {
        writeln!(out, "{name:<10} {description}")?;
    }
    Ok(())
}
