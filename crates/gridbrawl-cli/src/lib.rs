//! # Gridbrawl CLI
//!
//! Drivers for the gridbrawl arena: game setup, the built-in strategies, a
//! single-game runner and a parallel batch runner. The `gridbrawl` binary is
//! a thin clap front end over this library.
//!
//! ## Modules
//!
//! - [`config`]: [`GameSetup`](config::GameSetup), loaded from JSON and validated
//! - [`roster`]: built-in strategies and their registry
//! - [`runner`]: play one game to completion
//! - [`batch`]: play many seeds in parallel and tally winners

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod error;
pub mod roster;
pub mod runner;

pub use batch::{run_batch, BatchSummary};
pub use config::{GameSetup, SetupError};
pub use error::RunError;
pub use runner::{play, standings, GameReport, RoundPhase, Standing};
