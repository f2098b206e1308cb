//! Match result recording.

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchResult, PlayerId};
use crate::db::TournamentStore;
use std::sync::Arc;

/// Applies match outcomes to the standings
#[derive(Clone)]
pub struct MatchRecorder {
    store: Arc<dyn TournamentStore>,
}

impl MatchRecorder {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Record that `winner_id` beat `loser_id`
    ///
    /// The winner gains one win and one match, the loser one match. Both rows
    /// change in one store transaction or neither does.
    ///
    /// # Errors
    ///
    /// * `TournamentError::SelfMatch` - winner and loser are the same player
    /// * `TournamentError::PlayerNotFound` - either player is unregistered
    pub async fn report(&self, winner_id: PlayerId, loser_id: PlayerId) -> TournamentResult<()> {
        self.report_result(&MatchResult::new(winner_id, loser_id))
            .await
    }

    /// Record a match outcome
    pub async fn report_result(&self, result: &MatchResult) -> TournamentResult<()> {
        if result.winner_id == result.loser_id {
            return Err(TournamentError::SelfMatch(result.winner_id));
        }

        self.store.update_standings(&result.deltas()).await?;
        log::info!(
            "Recorded match: player {} beat player {}",
            result.winner_id,
            result.loser_id
        );

        Ok(())
    }

    /// Zero every player's wins and matches, keeping the players registered
    pub async fn reset_matches(&self) -> TournamentResult<()> {
        self.store.reset_standings().await?;
        log::info!("Reset all match records");
        Ok(())
    }
}
