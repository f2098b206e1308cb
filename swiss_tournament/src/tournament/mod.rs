//! Swiss-system tournament components.
//!
//! This module provides:
//! - Player registration (`PlayerStore`)
//! - Atomic match recording (`MatchRecorder`)
//! - Deterministic standings and ranks (`StandingsCalculator`)
//! - Adjacent-standings pairing with byes (`PairingEngine`)
//! - A controller wiring all of them to one store (`TournamentController`)
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::tournament::TournamentController;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()?).await?;
//!     db.migrate().await?;
//!     let tournament = TournamentController::postgres(Arc::new(db.pool().clone()));
//!
//!     let ada = tournament.register_player("Ada").await?;
//!     let bo = tournament.register_player("Bo").await?;
//!     tournament.report_match(ada.id, bo.id).await?;
//!
//!     for pairing in tournament.get_pairings().await? {
//!         println!("{} vs {}", pairing.player1_name, pairing.player2_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod errors;
pub mod matches;
pub mod models;
pub mod pairing;
pub mod players;
pub mod standings;

pub use controller::TournamentController;
pub use errors::{ErrorKind, TournamentError, TournamentResult};
pub use matches::MatchRecorder;
pub use models::{
    MatchResult, Pairing, Player, PlayerId, RankedStanding, RoundPairings, StandingDelta,
    StandingRecord,
};
pub use pairing::{PairingEngine, pair_adjacent};
pub use players::PlayerStore;
pub use standings::{StandingsCalculator, order_standings, rank_standings, standings_order};
