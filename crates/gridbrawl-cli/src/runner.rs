//! Play one game from a [`GameSetup`] to its end.

use std::fmt;

use gridbrawl_core::{AgentId, AgentRegistry, Arena, Weapon};
use serde::Serialize;

use crate::config::GameSetup;
use crate::error::RunError;

/// One agent's end-of-game line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Arena-assigned id.
    pub id: AgentId,
    /// Strategy name from the roster.
    pub kind: String,
    /// Name the agent reports.
    pub name: String,
    /// Map symbol.
    pub symbol: char,
    /// Health left; zero or below means out.
    pub health: i32,
    /// Armor left.
    pub armor: i32,
    /// Weapon carried.
    pub weapon: Weapon,
}

impl Standing {
    /// True while health is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) health {} armor {} weapon {}",
            self.name, self.symbol, self.health, self.armor, self.weapon
        )?;
        if !self.is_alive() {
            write!(f, " - is out")?;
        }
        Ok(())
    }
}

/// How a game ended.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    /// Arena seed.
    pub seed: u64,
    /// Rounds played.
    pub rounds: u64,
    /// The sole survivor, if there is one.
    pub winner: Option<Standing>,
    /// Every agent in id order.
    pub standings: Vec<Standing>,
    /// Final board printout.
    pub board: String,
}

impl GameReport {
    /// Snapshot a finished arena. `roster` maps ids back to strategy names.
    #[must_use]
    pub fn from_arena(arena: &Arena, roster: &[String]) -> Self {
        let standings = standings(arena, roster);
        let winner = arena
            .winner()
            .and_then(|id| standings.iter().find(|s| s.id == id).cloned());
        Self {
            seed: arena.seed(),
            rounds: arena.round(),
            winner,
            standings,
            board: arena.render(),
        }
    }

    /// Winner's display name, or `none` for a draw.
    #[must_use]
    pub fn winner_name(&self) -> &str {
        self.winner.as_ref().map_or("none", |s| s.name.as_str())
    }
}

/// Every agent's current line, in id order. `roster` maps ids back to
/// strategy names.
#[must_use]
pub fn standings(arena: &Arena, roster: &[String]) -> Vec<Standing> {
    arena
        .agents()
        .map(|(id, slot)| {
            let agent = slot.agent();
            Standing {
                id,
                kind: roster
                    .get(id.as_u32() as usize)
                    .cloned()
                    .unwrap_or_default(),
                name: agent.name().to_string(),
                symbol: slot.symbol(),
                health: agent.health(),
                armor: agent.armor(),
                weapon: agent.weapon(),
            }
        })
        .collect()
}

/// When [`play`] hands the arena to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Before round `arena.round() + 1` is played.
    Starting,
    /// Right after round `arena.round()`; its events are still in the log.
    Finished,
}

/// Validate `setup`, build every roster entry and seat them on a fresh board.
///
/// # Errors
///
/// Fails on an invalid setup, an unknown strategy, or a board the arena
/// rejects.
pub fn build_arena(setup: &GameSetup, registry: &AgentRegistry) -> Result<Arena, RunError> {
    setup.validate(registry)?;
    let agents = setup
        .roster
        .iter()
        .enumerate()
        .map(|(index, kind)| registry.create(kind, setup.agent_seed(index)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Arena::new(
        setup.height,
        setup.width,
        agents,
        setup.obstacles,
        setup.seed,
    )?)
}

/// Play until one agent is left or the round cap is hit.
///
/// `on_round` sees the arena on both sides of every round, for progress
/// output.
///
/// # Errors
///
/// Fails only while building the arena; see [`build_arena`].
pub fn play(
    setup: &GameSetup,
    registry: &AgentRegistry,
    mut on_round: impl FnMut(RoundPhase, &Arena),
) -> Result<GameReport, RunError> {
    let mut arena = build_arena(setup, registry)?;
    while arena.round() < setup.max_rounds && arena.alive_count() > 1 {
        on_round(RoundPhase::Starting, &arena);
        arena.iterate();
        on_round(RoundPhase::Finished, &arena);
    }
    let report = GameReport::from_arena(&arena, &setup.roster);
    tracing::debug!(
        seed = setup.seed,
        rounds = report.rounds,
        winner = report.winner_name(),
        "game over"
    );
    Ok(report)
}
