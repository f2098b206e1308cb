//! Tournament controller tying the components to one store.

use super::errors::TournamentResult;
use super::matches::MatchRecorder;
use super::models::{Pairing, Player, PlayerId, RankedStanding, RoundPairings, StandingRecord};
use super::pairing::PairingEngine;
use super::players::PlayerStore;
use super::standings::StandingsCalculator;
use crate::db::{MemoryTournamentStore, PgTournamentStore, TournamentStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Entry point for callers running a tournament
#[derive(Clone)]
pub struct TournamentController {
    players: PlayerStore,
    matches: MatchRecorder,
    standings: StandingsCalculator,
    pairings: PairingEngine,
}

impl TournamentController {
    /// Create a controller over any store
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self {
            players: PlayerStore::new(store.clone()),
            matches: MatchRecorder::new(store.clone()),
            standings: StandingsCalculator::new(store.clone()),
            pairings: PairingEngine::new(store),
        }
    }

    /// Create a controller backed by PostgreSQL
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self::new(Arc::new(PgTournamentStore::new(pool)))
    }

    /// Create a controller backed by process memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTournamentStore::new()))
    }

    /// Zero all match records, keeping registered players
    pub async fn reset_tournament(&self) -> TournamentResult<()> {
        self.matches.reset_matches().await
    }

    /// Remove all players, standings and pairings
    pub async fn reset_players(&self) -> TournamentResult<()> {
        self.players.clear().await
    }

    pub async fn register_player(&self, name: &str) -> TournamentResult<Player> {
        self.players.register(name).await
    }

    pub async fn count_players(&self) -> TournamentResult<usize> {
        self.players.count().await
    }

    pub async fn get_player(&self, player_id: PlayerId) -> TournamentResult<Player> {
        self.players.get(player_id).await
    }

    pub async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<()> {
        self.matches.report(winner_id, loser_id).await
    }

    pub async fn get_standings(&self) -> TournamentResult<Vec<StandingRecord>> {
        self.standings.standings().await
    }

    pub async fn ranked_standings(&self) -> TournamentResult<Vec<RankedStanding>> {
        self.standings.ranked_standings().await
    }

    /// Generate and store the next round's pairings
    pub async fn get_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        Ok(self.pairings.next_round_pairings().await?.pairings)
    }

    /// Generate and store the next round, including its bye
    pub async fn next_round(&self) -> TournamentResult<RoundPairings> {
        self.pairings.next_round_pairings().await
    }

    /// Pairings stored for the current round
    pub async fn current_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        self.pairings.current_pairings().await
    }
}
