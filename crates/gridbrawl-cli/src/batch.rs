//! Many games, one per seed, played in parallel.
//!
//! Game `i` runs with seed `setup.seed + i` (wrapping), so a batch is
//! reproducible and any single game in it can be replayed with `run --seed`.

use std::collections::BTreeMap;

use gridbrawl_core::AgentRegistry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GameSetup;
use crate::error::RunError;
use crate::runner::{play, GameReport};

/// Outcome tally for a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Games played.
    pub games: u32,
    /// Wins per strategy name.
    pub wins: BTreeMap<String, u32>,
    /// Games with zero or several survivors.
    pub draws: u32,
    /// Average game length in rounds.
    pub mean_rounds: f64,
}

impl BatchSummary {
    /// Tally finished games.
    #[must_use]
    pub fn from_reports(reports: &[GameReport]) -> Self {
        let mut summary = Self {
            games: u32::try_from(reports.len()).unwrap_or(u32::MAX),
            ..Self::default()
        };
        for report in reports {
            match &report.winner {
                Some(winner) => *summary.wins.entry(winner.kind.clone()).or_insert(0) += 1,
                None => summary.draws += 1,
            }
        }
        if !reports.is_empty() {
            let total: u64 = reports.iter().map(|r| r.rounds).sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = total as f64 / reports.len() as f64;
            summary.mean_rounds = mean;
        }
        summary
    }

    /// Share of games won by `kind`, in `[0, 1]`.
    #[must_use]
    pub fn win_rate(&self, kind: &str) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins.get(kind).copied().unwrap_or(0)) / f64::from(self.games)
    }
}

/// Play `games` seeds of `setup` in parallel and tally the winners.
///
/// # Errors
///
/// Fails if the setup is invalid; every game shares it, so the first game
/// to fail decides.
pub fn run_batch(
    setup: &GameSetup,
    registry: &AgentRegistry,
    games: u32,
) -> Result<BatchSummary, RunError> {
    setup.validate(registry)?;
    tracing::info!(games, seed = setup.seed, "starting batch");

    let reports = (0..games)
        .into_par_iter()
        .map(|i| {
            let game = GameSetup {
                seed: setup.seed.wrapping_add(u64::from(i)),
                ..setup.clone()
            };
            play(&game, registry, |_, _| {})
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = BatchSummary::from_reports(&reports);
    tracing::info!(
        games = summary.games,
        draws = summary.draws,
        mean_rounds = summary.mean_rounds,
        "batch complete"
    );
    Ok(summary)
}
