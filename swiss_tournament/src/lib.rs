//! # Swiss Tournament
//!
//! A Swiss-system tournament engine: players register, match results update
//! their win records, and each new round pairs players with similar records.
//!
//! ## Core Modules
//!
//! - [`tournament`]: Players, match recording, standings and pairing
//! - [`db`]: The `TournamentStore` trait with PostgreSQL and in-memory stores
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::TournamentController;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), swiss_tournament::TournamentError> {
//! let tournament = TournamentController::in_memory();
//! let a = tournament.register_player("Ada").await?;
//! let b = tournament.register_player("Bo").await?;
//! tournament.report_match(a.id, b.id).await?;
//!
//! let standings = tournament.get_standings().await?;
//! assert_eq!(standings[0].player_id, a.id);
//! # Ok(())
//! # }
//! ```

/// Persistence layer and store implementations.
pub mod db;

/// Tournament components and data models.
pub mod tournament;
pub use tournament::{
    ErrorKind, MatchResult, Pairing, Player, PlayerId, RoundPairings, StandingRecord,
    TournamentController, TournamentError, TournamentResult,
};
